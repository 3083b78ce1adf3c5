use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Placement {
    pub position: u32,
    pub competitor: usize,
    pub probability: f64,
}

/// Greedy top-K finishing order. Positions are strictly increasing from 1 and
/// no competitor appears twice.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Assignment {
    placements: Vec<Placement>,
}

impl Assignment {
    pub(crate) fn from_placements(placements: Vec<Placement>) -> Self {
        Self { placements }
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn position_of(&self, competitor: usize) -> Option<u32> {
        self.placements
            .iter()
            .find(|p| p.competitor == competitor)
            .map(|p| p.position)
    }
}
