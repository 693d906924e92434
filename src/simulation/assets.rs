//! Texture catalog: the asset-provider boundary
//!
//! The core never loads images itself; it picks texture *names* from a
//! per-category catalog and hands them to the renderer. Picks are
//! pseudo-random without replacement, drawing from a shrinking pool so no
//! two planets repeat a texture until the pool is exhausted, at which
//! point it refills from the full list.
//!
//! An empty category is a startup error: the game fails fast rather than
//! proceeding with missing textures.

use anyhow::{bail, Result};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Planet,
    BlackHole,
}

#[derive(Debug, Clone)]
struct Pool {
    all: Vec<String>,
    remaining: Vec<String>,
}

impl Pool {
    fn draw(&mut self, rng: &mut ChaCha8Rng) -> String {
        if self.remaining.is_empty() {
            log::debug!("texture pool exhausted, refilling ({} entries)", self.all.len());
            self.remaining = self.all.clone();
        }
        let i = rng.gen_range(0..self.remaining.len());
        self.remaining.swap_remove(i)
    }
}

#[derive(Debug, Clone)]
pub struct Catalog {
    planets: Pool,
    black_holes: Pool,
}

impl Catalog {
    pub fn new(planets: Vec<String>, black_holes: Vec<String>) -> Result<Self> {
        if planets.is_empty() {
            bail!("texture catalog has no planet textures");
        }
        if black_holes.is_empty() {
            bail!("texture catalog has no black hole textures");
        }
        Ok(Self {
            planets: Pool {
                remaining: planets.clone(),
                all: planets,
            },
            black_holes: Pool {
                remaining: black_holes.clone(),
                all: black_holes,
            },
        })
    }

    /// Pick a texture name for `category`, without replacement until the
    /// category pool runs dry.
    pub fn draw(&mut self, category: Category, rng: &mut ChaCha8Rng) -> String {
        match category {
            Category::Planet => self.planets.draw(rng),
            Category::BlackHole => self.black_holes.draw(rng),
        }
    }
}
