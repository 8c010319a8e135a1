use serde::Serialize;

/// One glyph to paint at a lattice cell center (CSS pixels).
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct DrawInstruction {
    pub x: f32,
    pub y: f32,
    pub glyph: char,
}

/// Draw list of the current frame plus flat copies laid out for JS:
/// `xy` is interleaved `[x0, y0, x1, y1, ...]`, `glyphs` holds code points.
/// Allocated on resize, reused every frame.
pub(crate) struct RenderBuffers {
    draws: Vec<DrawInstruction>,
    xy: Vec<f32>,
    glyphs: Vec<u32>,
}

impl RenderBuffers {
    pub(crate) fn with_capacity(n: usize) -> Self {
        Self {
            draws: Vec::with_capacity(n),
            xy: Vec::with_capacity(n * 2),
            glyphs: Vec::with_capacity(n),
        }
    }

    #[inline]
    pub(crate) fn clear(&mut self) {
        self.draws.clear();
        self.xy.clear();
        self.glyphs.clear();
    }

    #[inline]
    pub(crate) fn push(&mut self, d: DrawInstruction) {
        self.xy.push(d.x);
        self.xy.push(d.y);
        self.glyphs.push(d.glyph as u32);
        self.draws.push(d);
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.draws.len()
    }

    #[inline]
    pub(crate) fn draws(&self) -> &[DrawInstruction] {
        &self.draws
    }

    pub(crate) fn xy_ptr(&self) -> *const f32 {
        self.xy.as_ptr()
    }

    pub(crate) fn glyph_ptr(&self) -> *const u32 {
        self.glyphs.as_ptr()
    }

    pub(crate) fn to_json(&self) -> String {
        serde_json::to_string(&self.draws).unwrap_or_else(|_| "[]".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_fills_flat_buffers_in_order() {
        let mut buf = RenderBuffers::with_capacity(2);
        buf.push(DrawInstruction { x: 6.0, y: 18.0, glyph: 'A' });
        buf.push(DrawInstruction { x: 18.0, y: 54.0, glyph: 'Δ' });
        assert_eq!(buf.len(), 2);
        assert_eq!(buf.xy, vec![6.0, 18.0, 18.0, 54.0]);
        assert_eq!(buf.glyphs, vec!['A' as u32, 'Δ' as u32]);

        buf.clear();
        assert_eq!(buf.len(), 0);
        assert!(buf.xy.is_empty());
    }

    #[test]
    fn json_lists_draws() {
        let mut buf = RenderBuffers::with_capacity(1);
        buf.push(DrawInstruction { x: 6.0, y: 18.0, glyph: 'A' });
        assert_eq!(buf.to_json(), r#"[{"x":6.0,"y":18.0,"glyph":"A"}]"#);
    }
}
