use cutout_ipc::ToolKind;
use serde::{Deserialize, Serialize};

/// Editing tool active in a session
///
/// Exactly one tool is active at a time. Switching tools never mutates the
/// surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[repr(u8)]
pub enum Tool {
    /// Paint transparency in (destination-out)
    #[default]
    Erase = 0,
    /// Copy original pixels back from the pristine buffer
    Restore = 1,
    /// Freehand keep-only region selection
    Lasso = 2,
    /// Move the view, no pixel mutation
    Pan = 3,
}

impl From<ToolKind> for Tool {
    fn from(kind: ToolKind) -> Self {
        match kind {
            ToolKind::Erase => Tool::Erase,
            ToolKind::Restore => Tool::Restore,
            ToolKind::Lasso => Tool::Lasso,
            ToolKind::Pan => Tool::Pan,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_from_wire_kind() {
        assert_eq!(Tool::from(ToolKind::Restore), Tool::Restore);
        assert_eq!(Tool::from(ToolKind::Pan), Tool::Pan);
        assert_eq!(Tool::default(), Tool::Erase);
    }
}
