use rstar::{Envelope, RTree, RTreeObject, AABB};

/// An axis-aligned word box, `[x0, y0, x1, y1]`
#[derive(Debug, Clone)]
pub struct BoxInstance {
    pub bounds: [f32; 4],
}

impl BoxInstance {
    pub fn new(bounds: [f32; 4]) -> Self {
        Self { bounds }
    }

    fn to_aabb(bounds: &[f32; 4]) -> AABB<[f32; 2]> {
        AABB::from_corners([bounds[0], bounds[1]], [bounds[2], bounds[3]])
    }
}

impl RTreeObject for BoxInstance {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        Self::to_aabb(&self.bounds)
    }
}

/// Spatial index over the boxes placed so far.
#[derive(Debug, Clone, Default)]
pub struct PlacedBoxTree {
    rtree: RTree<BoxInstance>,
    envelope: Option<AABB<[f32; 2]>>,
}

impl PlacedBoxTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any placed box intersects `bounds`. Touching edges count as intersecting.
    pub fn intersects_any(&self, bounds: &[f32; 4]) -> bool {
        let query = BoxInstance::to_aabb(bounds);
        match &self.envelope {
            None => false,
            Some(envelope) if !envelope.intersects(&query) => false,
            Some(_) => self
                .rtree
                .locate_in_envelope_intersecting(&query)
                .next()
                .is_some(),
        }
    }

    /// Insert a new box into the tree
    pub fn insert(&mut self, instance: BoxInstance) {
        let geom_envelope = instance.envelope();
        self.envelope = Some(match self.envelope.take() {
            Some(envelope) => envelope.merged(&geom_envelope),
            None => geom_envelope,
        });
        self.rtree.insert(instance);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersects_any() {
        let mut tree = PlacedBoxTree::new();
        assert!(!tree.intersects_any(&[0.0, 0.0, 10.0, 10.0]));

        tree.insert(BoxInstance::new([0.0, 0.0, 10.0, 10.0]));
        tree.insert(BoxInstance::new([20.0, 0.0, 30.0, 10.0]));

        assert!(tree.intersects_any(&[5.0, 5.0, 15.0, 15.0]));
        assert!(tree.intersects_any(&[10.0, 0.0, 20.0, 10.0]));
        assert!(!tree.intersects_any(&[11.0, 0.0, 19.0, 10.0]));
        assert!(!tree.intersects_any(&[0.0, 20.0, 30.0, 30.0]));
    }

    #[test]
    fn test_query_outside_envelope_misses() {
        let mut tree = PlacedBoxTree::new();
        tree.insert(BoxInstance::new([0.0, 0.0, 10.0, 10.0]));
        tree.insert(BoxInstance::new([20.0, -5.0, 30.0, 10.0]));
        assert!(!tree.intersects_any(&[31.0, -5.0, 40.0, 10.0]));
        assert!(tree.intersects_any(&[29.0, -10.0, 40.0, -5.0]));
    }
}
