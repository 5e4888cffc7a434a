/// All user-facing messages, categorized by subsystem.
///
/// Keeping the text behind one enum gives a single source of truth for
/// wording and makes parameter usage type-checked at compile time. The
/// actual text lives in the `Display` implementation in `display.rs`.
#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleWeek,
    ConfigModuleExport,
    PromptSelectModules,
    PromptFirstDayOfWeek,
    PromptExportDirectory,

    // === BLOCK MESSAGES ===
    BlockCreated(String),     // category
    BlockUpdated(String),     // category
    BlockDeleted(String),     // category
    BlockCompleted(String),   // category
    BlockProgressSet(String, u8), // category, progress
    BlockNotFound(String),    // id
    BlockTimeInvalid(String), // reason
    NoBlocksFound,
    BlocksHeader,
    ConfirmDeleteBlock(String), // category
    PromptSelectBlock,
    PromptCategory,
    PromptStartTime,
    PromptEndTime,
    PromptColor,
    PromptProgress,

    // === WEEK MESSAGES ===
    WeekHeader(String, String), // first date, last date
    SummaryHeader,
    ConfirmCopyWeek(usize), // template size
    WeekCopied(usize),      // produced count
    CopyCancelled,
    NothingToCopy,

    // === STORAGE MESSAGES ===
    BlockStorageCorrupt(String), // parse error
    BlocksNotSaved,

    // === EXPORT MESSAGES ===
    ExportSuccess(String), // file path
    NothingToExport,

    // === INPUT MESSAGES ===
    InvalidDateFormat(String), // raw value
}
