/// Drawing tools selectable from the tool panel; exactly one is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Pencil,
    Line,
    Rectangle,
    Oval,
    Eraser,
    Text,
}

impl Tool {
    pub const ALL: [Tool; 6] = [
        Tool::Pencil,
        Tool::Line,
        Tool::Rectangle,
        Tool::Oval,
        Tool::Eraser,
        Tool::Text,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Tool::Pencil => "Pencil",
            Tool::Line => "Line",
            Tool::Rectangle => "Rectangle",
            Tool::Oval => "Oval",
            Tool::Eraser => "Eraser",
            Tool::Text => "Text",
        }
    }

    /// Freehand tools collect a point list and go through the smoother.
    pub fn is_freehand(&self) -> bool {
        matches!(self, Tool::Pencil | Tool::Eraser)
    }

    /// Shape tools commit a primitive spanned by the gesture's endpoints.
    pub fn is_shape(&self) -> bool {
        matches!(self, Tool::Line | Tool::Rectangle | Tool::Oval)
    }
}
