//! Rendering context - per-document state threaded through every draw call

/// Rendering context
///
/// One context per generated document. Curved labels take their
/// `textpath-N` ids from here, so two documents built with fresh contexts
/// produce identical markup.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderContext {
    /// Stroke width for every outlined wedge
    pub stroke_width: f64,
    /// Next id handed to a curved label's hidden path
    next_text_path: usize,
}

impl RenderContext {
    pub fn new(stroke_width: f64) -> Self {
        Self {
            stroke_width,
            next_text_path: 0,
        }
    }

    /// Allocate the next unique `textpath-N` id
    pub fn next_text_path_id(&mut self) -> String {
        let id = format!("textpath-{}", self.next_text_path);
        self.next_text_path += 1;
        id
    }

    /// Number of text-path ids handed out so far
    pub fn text_paths_issued(&self) -> usize {
        self.next_text_path
    }
}
