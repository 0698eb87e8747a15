use hoverlate_types::OverlayCommand;

/// Overlay state, owned by the UI thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayState {
    pub visible: bool,
    pub position: (i32, i32),
    pub displayed_text: String,
}

impl OverlayState {
    pub fn new(initial_text: impl Into<String>) -> Self {
        Self {
            visible: false,
            position: (0, 0),
            displayed_text: initial_text.into(),
        }
    }

    pub fn apply(&mut self, command: &OverlayCommand) {
        match command {
            OverlayCommand::MoveTo { x, y } => self.position = (*x, *y),
            OverlayCommand::Show => self.visible = true,
            OverlayCommand::Hide => self.visible = false,
            OverlayCommand::SetText(text) => self.displayed_text = text.clone(),
        }
    }
}
