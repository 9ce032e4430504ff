use num_traits::{Float, cast};

use crate::collections::FxIndexMap;
use crate::errors::SearchError;
use crate::geometry::Cell;
use super::{TerrainKind, TileGrid};


/// How a search treats one terrain kind
/// `passable` is checked before `cost` is ever read
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TerrainRule<C = f64> {
    pub cost: C, // cost of stepping onto the tile
    pub passable: bool,
}

impl<C> TerrainRule<C> {
    pub fn passable(cost: C) -> Self {
        Self { cost, passable: true }
    }

    pub fn impassable(cost: C) -> Self {
        Self { cost, passable: false }
    }
}


/// Terrain kind -> traversal rule
/// Defaults: open 1, wall 100 (impassable), water 25, grass 10
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
pub struct CostModel<C = f64> {
    rules: FxIndexMap<TerrainKind, TerrainRule<C>>,
}

impl<C: Float> Default for CostModel<C> {
    fn default() -> Self {
        Self::standard()
    }
}

impl<C: Float> CostModel<C> {

    /// The stock cost table
    pub fn standard() -> Self {
        let mut rules = FxIndexMap::default();
        rules.insert(TerrainKind::Open, TerrainRule::passable(C::one()));
        rules.insert(TerrainKind::Wall, TerrainRule::impassable(literal(100.0)));
        rules.insert(TerrainKind::Water, TerrainRule::passable(literal(25.0)));
        rules.insert(TerrainKind::Grass, TerrainRule::passable(literal(10.0)));
        Self { rules }
    }

    /// Build from explicit rules; every terrain kind must be covered
    pub fn from_rules<I>(rules: I) -> Result<Self, SearchError>
    where
        I: IntoIterator<Item = (TerrainKind, TerrainRule<C>)>,
    {
        let model = Self { rules: rules.into_iter().collect() };
        model.validate()?;
        Ok(model)
    }

    /// Replace the rule for one terrain kind
    pub fn with_rule(mut self, kind: TerrainKind, rule: TerrainRule<C>) -> Result<Self, SearchError> {
        check_cost(kind, rule.cost)?;
        self.rules.insert(kind, rule);
        Ok(self)
    }

    /// Costs must be finite and non-negative, and no terrain kind may be missing
    /// Models built through serde skip this until a planner is created from them
    pub fn validate(&self) -> Result<(), SearchError> {
        for kind in TerrainKind::ALL {
            let rule = self.rule(kind)?;
            check_cost(kind, rule.cost)?;
        }
        Ok(())
    }

    pub fn rule(&self, kind: TerrainKind) -> Result<TerrainRule<C>, SearchError> {
        self.rules
            .get(&kind)
            .copied()
            .ok_or(SearchError::MissingTerrainRule(kind))
    }

    pub fn cost(&self, kind: TerrainKind) -> Result<C, SearchError> {
        Ok(self.rule(kind)?.cost)
    }

    pub fn is_passable(&self, kind: TerrainKind) -> Result<bool, SearchError> {
        Ok(self.rule(kind)?.passable)
    }

    /// Sum of the costs of every cell entered along `path`
    /// The first cell is where the walker already stands, so it is free
    pub fn path_cost(&self, grid: &TileGrid, path: &[Cell]) -> Result<C, SearchError> {
        let mut total = C::zero();
        for &cell in path.iter().skip(1) {
            total = total + self.cost(grid.terrain(cell)?)?;
        }
        Ok(total)
    }
}

fn check_cost<C: Float>(kind: TerrainKind, cost: C) -> Result<(), SearchError> {
    if !cost.is_finite() || cost < C::zero() {
        return Err(SearchError::InvalidCost {
            kind,
            cost: cost.to_f64().unwrap_or(f64::NAN),
        });
    }
    Ok(())
}

// Exact for f32 and f64; anything that cannot hold the value is rejected by `validate`
fn literal<C: Float>(value: f64) -> C {
    cast(value).unwrap_or_else(C::nan)
}
