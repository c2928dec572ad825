//! CatalogSource - combatants drawn at random from a species catalog

use super::{BuildRequest, CombatantSource, SourceError};
use crate::combatant::{pad_moves, Combatant, Move};
use crate::config::{BattleConfig, ConfigError, MoveEntry, Species, SpeciesCatalog};
use crate::types::Side;
use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Builds combatants by picking a random species and a random set of its
/// damaging moves
///
/// With a seed, every (side, slot) request gets its own derived RNG, so the
/// same seed always yields the same rosters regardless of build order.
#[derive(Debug, Clone)]
pub struct CatalogSource {
    catalog: SpeciesCatalog,
    fallback: Move,
    seed: Option<u64>,
}

impl CatalogSource {
    /// Create an unseeded source
    pub fn new(catalog: SpeciesCatalog, fallback: Move) -> Self {
        CatalogSource {
            catalog,
            fallback,
            seed: None,
        }
    }

    /// Create a source that always produces the same rosters
    pub fn seeded(catalog: SpeciesCatalog, fallback: Move, seed: u64) -> Self {
        CatalogSource {
            catalog,
            fallback,
            seed: Some(seed),
        }
    }

    /// Create a source from match settings
    pub fn from_config(config: &BattleConfig) -> Result<Self, ConfigError> {
        let catalog = config.catalog()?;
        let fallback = config.fallback_move.to_move();
        Ok(match config.seed {
            Some(seed) => CatalogSource::seeded(catalog, fallback, seed),
            None => CatalogSource::new(catalog, fallback),
        })
    }

    pub fn catalog(&self) -> &SpeciesCatalog {
        &self.catalog
    }

    fn rng_for(&self, request: BuildRequest) -> StdRng {
        match self.seed {
            Some(seed) => {
                let side = match request.side {
                    Side::Player => 0u64,
                    Side::Ai => 1u64,
                };
                let stream = (side << 32) | request.slot as u64;
                StdRng::seed_from_u64(seed ^ stream.wrapping_mul(0x9E37_79B9_7F4A_7C15))
            }
            None => StdRng::from_entropy(),
        }
    }

    /// Pick a species and assemble a combatant from it
    pub fn draw(&self, request: BuildRequest) -> Result<Combatant, SourceError> {
        let mut rng = self.rng_for(request);
        let species = self
            .catalog
            .species
            .choose(&mut rng)
            .ok_or(SourceError::EmptyCatalog)?;
        self.assemble(species, &mut rng)
    }

    /// Turn a species into a combatant
    ///
    /// The move pool is shuffled, the first four damaging moves are kept, and
    /// any missing slots are filled with the fallback move.
    pub fn assemble(&self, species: &Species, rng: &mut impl Rng) -> Result<Combatant, SourceError> {
        species
            .validate()
            .map_err(|reason| SourceError::InvalidSpecies {
                name: species.name.clone(),
                reason,
            })?;

        let mut pool: Vec<&MoveEntry> = species.moves.iter().collect();
        pool.shuffle(rng);
        let moves = pad_moves(
            pool.into_iter()
                .filter(|entry| entry.is_damaging())
                .map(MoveEntry::to_move),
            &self.fallback,
        );

        let combatant = Combatant::new(species.name.clone(), species.hp, species.speed, moves);
        Ok(match &species.sprite {
            Some(sprite) => combatant.with_sprite(sprite.clone()),
            None => combatant,
        })
    }
}

#[async_trait]
impl CombatantSource for CatalogSource {
    async fn build_combatant(&self, request: BuildRequest) -> Result<Combatant, SourceError> {
        self.draw(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::RosterBuilder;
    use crate::config::{default_catalog, parse_catalog};
    use std::sync::Arc;

    fn request(side: Side, slot: usize) -> BuildRequest {
        BuildRequest { side, slot }
    }

    fn single(toml: &str) -> SpeciesCatalog {
        parse_catalog(toml).unwrap()
    }

    #[test]
    fn test_short_pool_padded_with_fallback() {
        let catalog = single(
            r#"
[[species]]
id = 129
name = "magikarp"
hp = 20
speed = 80

[[species.moves]]
name = "splash"
category = "status"

[[species.moves]]
name = "tackle"
power = 40
category = "physical"
"#,
        );
        let source = CatalogSource::seeded(catalog, Move::struggle(), 1);
        let c = source.draw(request(Side::Player, 0)).unwrap();

        assert_eq!(c.name, "magikarp");
        assert_eq!(c.hp, 20);
        assert_eq!(c.speed, 80);
        assert_eq!(c.moves[0], Move::new("tackle", 40));
        assert!(c.moves[1..].iter().all(|m| *m == Move::struggle()));
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_no_damaging_moves_is_all_fallback() {
        let catalog = single(
            r#"
[[species]]
id = 63
name = "abra"
hp = 25
speed = 90
"#,
        );
        let source = CatalogSource::seeded(catalog, Move::new("Flail", 20), 3);
        let c = source.draw(request(Side::Ai, 2)).unwrap();
        assert!(c.moves.iter().all(|m| m.name == "Flail" && m.power == 20));
    }

    #[test]
    fn test_only_damaging_moves_picked() {
        let source = CatalogSource::seeded(default_catalog(), Move::struggle(), 99);
        for slot in 0..30 {
            let c = source.draw(request(Side::Player, slot)).unwrap();
            let species = source
                .catalog()
                .species
                .iter()
                .find(|s| s.name == c.name)
                .unwrap();
            for m in &c.moves {
                let from_pool = species
                    .moves
                    .iter()
                    .any(|e| e.is_damaging() && e.name == m.name && e.power == Some(m.power));
                assert!(from_pool || *m == Move::struggle(), "{} has unexpected move {}", c.name, m);
            }
        }
    }

    #[test]
    fn test_seeded_draw_is_repeatable() {
        let a = CatalogSource::seeded(default_catalog(), Move::struggle(), 42);
        let b = CatalogSource::seeded(default_catalog(), Move::struggle(), 42);
        for slot in 0..6 {
            assert_eq!(
                a.draw(request(Side::Ai, slot)).unwrap(),
                b.draw(request(Side::Ai, slot)).unwrap()
            );
        }
    }

    #[test]
    fn test_empty_catalog_errors() {
        let source = CatalogSource::new(SpeciesCatalog::default(), Move::struggle());
        let err = source.draw(request(Side::Player, 0)).unwrap_err();
        assert_eq!(err, SourceError::EmptyCatalog);
    }

    #[test]
    fn test_from_config_uses_seed_and_fallback() {
        let config = BattleConfig::parse("seed = 5\n[fallback_move]\nname = \"Flail\"\npower = 30").unwrap();
        let source = CatalogSource::from_config(&config).unwrap();
        let again = CatalogSource::from_config(&config).unwrap();
        assert_eq!(source.fallback, Move::new("Flail", 30));
        assert_eq!(
            source.draw(request(Side::Player, 1)).unwrap(),
            again.draw(request(Side::Player, 1)).unwrap()
        );
    }

    #[tokio::test]
    async fn test_seeded_rosters_are_repeatable() {
        let build = || async {
            let source = Arc::new(CatalogSource::seeded(default_catalog(), Move::struggle(), 7));
            RosterBuilder::new(source).build_rosters(6).await.unwrap()
        };
        let first = build().await;
        let second = build().await;
        assert_eq!(first.player, second.player);
        assert_eq!(first.ai, second.ai);
    }
}
