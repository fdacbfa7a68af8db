use crate::canvas::Surface;
use crate::coords::Viewport;

use super::DrawList;

/// Headless surface that records into a [`DrawList`].
///
/// `clear` drops the recorded stream, so after a render the list holds
/// exactly one frame.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    viewport: Viewport,
    list: DrawList,
}

impl RecordingSurface {
    pub fn new(viewport: Viewport) -> Self {
        Self { viewport, list: DrawList::new() }
    }

    #[inline]
    pub fn draw_list(&self) -> &DrawList {
        &self.list
    }
}

impl Surface for RecordingSurface {
    type Canvas = DrawList;

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn canvas(&mut self) -> &mut DrawList {
        &mut self.list
    }

    fn clear(&mut self) {
        self.list.clear();
    }
}
