//! Debug-build logging switches.

pub struct DebugFlags {
    /// Log every command dispatch with its outcome
    pub print_command_dispatch: bool,
    /// Log each URL before it is fetched
    pub print_fetch_urls: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_command_dispatch: false,
    print_fetch_urls: true,
};
