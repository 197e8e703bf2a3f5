//! Host shell command dispatch
//!
//! Applies `cutout-ipc` messages to the session, so a JSON-speaking shell can
//! drive the editor without linking against anything beyond the wire types.

use cutout_ipc::{EditorToHost, HostToEditor, PointerEvent};

use super::EditorSession;

impl EditorSession {
    /// Apply one host message, returning a reply when the host needs one
    pub fn apply_command(&mut self, command: HostToEditor) -> Option<EditorToHost> {
        match command {
            HostToEditor::Pointer(event) => match event {
                PointerEvent::Down { x, y } => {
                    self.pointer_down(x, y);
                    None
                }
                PointerEvent::Move { x, y } => {
                    self.pointer_move(x, y);
                    None
                }
                PointerEvent::Up { x, y } => {
                    // Gestures commit on pointer-up, so undo/redo availability
                    // may have changed
                    self.pointer_up(x, y);
                    Some(self.history_status())
                }
                PointerEvent::Wheel { delta_y, .. } => {
                    self.wheel(delta_y);
                    None
                }
            },
            HostToEditor::SelectTool { tool } => {
                self.set_tool(tool.into());
                None
            }
            HostToEditor::SetBrushRadius { radius } => {
                self.set_brush_radius(radius);
                None
            }
            HostToEditor::ViewportResized { width, height } => {
                self.resize_viewport(width, height);
                None
            }
            HostToEditor::Undo => {
                self.undo();
                Some(self.history_status())
            }
            HostToEditor::Redo => {
                self.redo();
                Some(self.history_status())
            }
            HostToEditor::Save => match self.save() {
                Ok(png) => Some(EditorToHost::Saved { png }),
                Err(err) => Some(EditorToHost::Error {
                    message: err.to_string(),
                }),
            },
        }
    }

    fn history_status(&self) -> EditorToHost {
        EditorToHost::HistoryChanged {
            can_undo: self.can_undo(),
            can_redo: self.can_redo(),
        }
    }
}
