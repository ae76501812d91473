#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleSource,
    ConfigModulePoll,
    ConfigModuleDisplay,
    ConfigEnvOverride(String), // url
    InvalidTimezone(String),   // timezone name

    // === PROMPTS ===
    PromptSelectModules,
    PromptSourceUrl,
    PromptTimeoutSecs,
    PromptPollInterval,
    PromptTimezone,

    // === WATCH MESSAGES ===
    WatchStarted(String, u64), // url, interval in seconds
    WatchControls,
    WatchStopped,
    WatchUnknownCommand(String),

    // === FETCH MESSAGES ===
    FetchFailed(String),  // error
    FetchAborted(String), // join error
    ItemsDropped(usize),  // count of items with start >= end

    // === DASHBOARD HEADER ===
    Subtitle(String, String), // day, tz
    StateIdle,
    StateLoading,
    StateRefreshed,
    StateCached,
    StateError,
    MetaLine(i64, i64), // age secs, ttl secs
    Placeholder,

    // === KPI LABELS ===
    KpiActive,
    KpiNextVisit,
    KpiNextVisitTime,
    KpiNextEnd,
    PeopleCount(u32),
    ActiveCount(usize),

    // === ACTIVE LIST ===
    ActiveHeader,
    ActiveHint(String), // earliest end clock
    ActiveHintNone,
    ActiveEmpty,

    // === RESERVATION TIMELINE ===
    TimelineHeader,
    TimelineEmpty,
    ReservationTitle(u32),      // people
    ReservationChannel(String), // channel
    GamesCount(u32),
    NoTitle,

    // === BADGES ===
    BadgeEnded,
    BadgeUpcoming,
    BadgeMinutesLeft(i64),

    // === ERROR LOG ===
    ErrorLogHeader,
}
