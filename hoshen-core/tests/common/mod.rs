use hoshen_core::{Label, NULL_LABEL, NodeSource, PixelBuffer};

/// Weighted nodes on a line; each node may touch its predecessor.
#[derive(Clone, Debug)]
pub struct Chain {
    links: Vec<bool>,
    weights: Vec<u64>,
    labels: Vec<Label>,
    cursor: Option<usize>,
}

impl Chain {
    /// `links[i]` joins node `i` to node `i - 1`; `links[0]` is ignored.
    #[must_use]
    pub fn new(links: Vec<bool>, weights: Vec<u64>) -> Self {
        assert_eq!(links.len(), weights.len(), "one weight per node");
        let labels = vec![NULL_LABEL; links.len()];
        Self {
            links,
            weights,
            labels,
            cursor: None,
        }
    }

    #[must_use]
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }
}

impl NodeSource for Chain {
    fn reset(&mut self) {
        self.cursor = None;
    }

    fn advance(&mut self) -> bool {
        let next = self.cursor.map_or(0, |index| index + 1);
        self.cursor = Some(next);
        next < self.labels.len()
    }

    fn neighbor_labels(&self, out: &mut Vec<Label>) {
        if let Some(index) = self.cursor.filter(|&index| index > 0 && self.links[index]) {
            out.push(self.labels[index - 1]);
        }
    }

    fn label(&self) -> Label {
        self.cursor.map_or(NULL_LABEL, |index| self.labels[index])
    }

    fn set_label(&mut self, label: Label) {
        if let Some(index) = self.cursor {
            self.labels[index] = label;
        }
    }

    fn weight(&self) -> u64 {
        self.cursor.map_or(0, |index| self.weights[index])
    }

    fn name(&self) -> &str {
        "chain"
    }
}

/// Paints a 0/1 mask: foreground white, background opaque black.
#[must_use]
pub fn paint<const W: usize>(rows: &[[u8; W]]) -> PixelBuffer {
    let mut image = PixelBuffer::new(W, rows.len()).expect("mask dimensions are valid");
    for (y, row) in rows.iter().enumerate() {
        for (x, &cell) in row.iter().enumerate() {
            let color = if cell == 0 {
                [0, 0, 0, 255]
            } else {
                [255, 255, 255, 255]
            };
            image.set_pixel(x, y, color);
        }
    }
    image
}
