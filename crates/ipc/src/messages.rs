//! Main IPC message enums for communication between the host shell and the
//! masking core.

use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;

use crate::error::IpcError;
use crate::input::PointerEvent;

/// Tool selected in the host toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ToolKind {
    #[default]
    Erase,
    Restore,
    Lasso,
    Pan,
}

/// Messages from the host shell to the editor core.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum HostToEditor {
    /// Pointer or wheel input over the viewport
    Pointer(PointerEvent),

    /// Toolbar tool selection
    SelectTool { tool: ToolKind },

    /// Brush radius slider change (buffer pixels)
    SetBrushRadius { radius: f32 },

    /// Host container was resized
    ViewportResized { width: u32, height: u32 },

    /// Step back one history entry
    Undo,

    /// Step forward one history entry
    Redo,

    /// Encode the current buffer for upload
    Save,
}

/// Messages from the editor core to the host shell.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum EditorToHost {
    /// Session is initialized and ready for input
    Ready { width: u32, height: u32 },

    /// Undo/redo availability changed after a commit or history step
    HistoryChanged { can_undo: bool, can_redo: bool },

    /// Encoded artifact ready for the upload collaborator
    Saved { png: Vec<u8> },

    /// Image decode failed; the editor was not initialized
    LoadFailed { message: String },

    /// Error notification
    Error { message: String },
}

/// Serialize a message to its JSON wire form.
pub fn encode<T: Serialize>(message: &T) -> Result<String, IpcError> {
    Ok(serde_json::to_string(message)?)
}

/// Deserialize a message from its JSON wire form.
pub fn decode<T: DeserializeOwned>(json: &str) -> Result<T, IpcError> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_roundtrip() {
        let cmd = HostToEditor::SelectTool {
            tool: ToolKind::Lasso,
        };
        let json = encode(&cmd).unwrap();
        let back: HostToEditor = decode(&json).unwrap();
        match back {
            HostToEditor::SelectTool { tool } => assert_eq!(tool, ToolKind::Lasso),
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[test]
    fn test_pointer_event_tagged_form() {
        let cmd = HostToEditor::Pointer(PointerEvent::Down { x: 3.0, y: 4.0 });
        let json = encode(&cmd).unwrap();
        assert!(json.contains("\"type\":\"Pointer\""));
        assert!(json.contains("\"data\""));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let result: Result<HostToEditor, _> = decode("not json");
        assert!(matches!(result, Err(IpcError::Serialize(_))));
    }
}
