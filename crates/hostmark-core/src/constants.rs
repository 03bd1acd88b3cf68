//! Workspace-wide constants.

/// Written to both target attributes when a reinforcement element has no host.
pub const NOT_LINKED: &str = "<not linked>";

/// Written to both target attributes when the host's category has no label.
pub const UNDETERMINED_CATEGORY: &str = "<undetermined category>";

/// Default name of the attribute receiving the host category label.
pub const DEFAULT_CATEGORY_ATTRIBUTE: &str = "baseCategoryLabel";

/// Default name of the attribute receiving the host mark.
pub const DEFAULT_MARK_ATTRIBUTE: &str = "baseMark";

/// Default name of the transaction wrapping an annotation pass.
pub const DEFAULT_TRANSACTION_NAME: &str = "Write host parameters to rebar";

/// Host dispatchers truncate failure messages to this many characters.
pub const MAX_FAILURE_MESSAGE_CHARS: usize = 1023;
