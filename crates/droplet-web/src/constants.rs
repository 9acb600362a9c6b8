// Page integration defaults for the web front end.

// Element shown while the wasm module and mesh are being prepared
pub const LOADING_ELEMENT_ID: &str = "loading";

// Console verbosity; the core logs mood transitions at debug level
pub const CONSOLE_LOG_LEVEL: log::Level = log::Level::Info;
