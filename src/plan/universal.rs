//! The `hpy.universal` extension descriptor.
//!
//! Source and include lists are fixed: the universal module entry point and
//! its runtime, the shared devel runtime helpers, and the debug-context
//! subsystem. Only the compile arguments vary with the debug mode.

use std::path::PathBuf;

use crate::plan::{debug_compile_args, ExtensionDescriptor};

/// Import name of the universal extension module.
pub const UNIVERSAL_EXTENSION_NAME: &str = "hpy.universal";

/// ABI-selection flag, always passed when compiling the extension.
pub const UNIVERSAL_ABI_FLAG: &str = "-DHPY_UNIVERSAL_ABI";

/// Source files of the universal extension, in compilation order.
const UNIVERSAL_SOURCES: &[&str] = &[
    // module entry point, handle management, core context
    "hpy/universal/src/hpymodule.c",
    "hpy/universal/src/handles.c",
    "hpy/universal/src/ctx.c",
    // method and context dispatch helpers
    "hpy/universal/src/ctx_meth.c",
    "hpy/universal/src/ctx_misc.c",
    // shared runtime support
    "hpy/devel/src/runtime/ctx_module.c",
    "hpy/devel/src/runtime/ctx_type.c",
    "hpy/devel/src/runtime/argparse.c",
    "hpy/devel/src/runtime/ctx_tracker.c",
    "hpy/devel/src/runtime/ctx_listbuilder.c",
    "hpy/devel/src/runtime/ctx_tuple.c",
    "hpy/devel/src/runtime/ctx_tuplebuilder.c",
    // debug-context subsystem
    "hpy/debug/src/debug_ctx.c",
    "hpy/debug/src/debug_handles.c",
    "hpy/debug/src/_debugmod.c",
    "hpy/debug/src/autogen_debug_wrappers.c",
];

/// Include directories of the universal extension.
const UNIVERSAL_INCLUDE_DIRS: &[&str] = &[
    "hpy/devel/include",
    "hpy/universal/src",
    "hpy/debug/src/include",
];

/// Build the descriptor for the universal extension.
pub fn universal_extension(debug: bool) -> ExtensionDescriptor {
    let mut compile_args = vec![UNIVERSAL_ABI_FLAG.to_string()];
    compile_args.extend(debug_compile_args(debug));

    ExtensionDescriptor {
        name: UNIVERSAL_EXTENSION_NAME.to_string(),
        sources: UNIVERSAL_SOURCES.iter().map(PathBuf::from).collect(),
        include_dirs: UNIVERSAL_INCLUDE_DIRS.iter().map(PathBuf::from).collect(),
        compile_args,
    }
}
