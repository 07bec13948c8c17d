use super::template::anneal_schedule;
use anyhow::Context;
use lcdash::{AssetRef, Dataset, Record, SessionData, VisualAssets};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

const POTENTIALS: [&str; 2] = ["GayBernePotential", "LennardJonesPotential"];
const APPROXIMATIONS: [&str; 3] = [
    "FixedNearestNeighbours",
    "SphereNearestNeighbours",
    "GayBernePotentialFast",
];
const LATTICE_SIDES: [u64; 3] = [4, 6, 8];

/// Configuration for synthesizing a batch of annealing runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub models: usize,
    pub heating_steps: usize,
    pub cooling_steps: usize,
    pub peak_temperature: f64,
    pub noise: f64,
    pub seed: u64,
    pub name_prefix: String,
    pub image_dir: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            models: 3,
            heating_steps: 10,
            cooling_steps: 10,
            peak_temperature: 2.0,
            noise: 0.02,
            seed: 0,
            name_prefix: "run".into(),
            image_dir: "models".into(),
        }
    }
}

impl GeneratorConfig {
    /// Model names share a fixed-width suffix so none is a prefix of another.
    fn model_name(&self, index: usize) -> String {
        let width = self.models.saturating_sub(1).to_string().len().max(2);
        format!("{}_{:0width$}", self.name_prefix, index, width = width)
    }
}

fn build_records(config: &GeneratorConfig, rng: &mut StdRng) -> Vec<Record> {
    let side = *LATTICE_SIDES.choose(rng).unwrap_or(&LATTICE_SIDES[0]);
    let potential = POTENTIALS.choose(rng).unwrap_or(&POTENTIALS[0]);
    let approximation = APPROXIMATIONS.choose(rng).unwrap_or(&APPROXIMATIONS[0]);
    let peak = config.peak_temperature.max(f64::EPSILON);
    let noise = config.noise.abs();

    let mut elapsed = 0.0;
    anneal_schedule(config.heating_steps, config.cooling_steps, peak)
        .into_iter()
        .enumerate()
        .map(|(step, (process, temperature))| {
            let mut jitter = || {
                if noise > 0.0 {
                    rng.gen_range(-noise..noise)
                } else {
                    0.0
                }
            };
            let order = 1.0 - temperature / peak;
            let temperature = temperature + jitter();
            let energy = -(order * 2.0 + 0.5) + jitter();
            let director_variance = (temperature / peak * 0.3 + jitter()).max(0.0);
            let avg_director_dist = ((1.0 - order) / 2.0 + jitter()).clamp(0.0, 1.0);
            elapsed += 1.0 + (side * side * side) as f64 * 0.01;
            Record {
                time: step as f64,
                temperature,
                energy,
                director_variance,
                avg_director_dist,
                time_used: elapsed,
                num_directors: side * side * side,
                potential: potential.to_string(),
                potential_approx: approximation.to_string(),
                process: process.to_string(),
            }
        })
        .collect()
}

pub fn build_session_from_config(config: &GeneratorConfig) -> anyhow::Result<SessionData> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut dataset: Vec<(String, Vec<Record>)> = Vec::with_capacity(config.models);
    let mut assets: Vec<(String, Vec<AssetRef>)> = Vec::with_capacity(config.models);

    for index in 0..config.models {
        let name = config.model_name(index);
        let records = build_records(config, &mut rng);
        let images: Vec<AssetRef> = (0..records.len())
            .map(|step| AssetRef::new(format!("{}/{}/{:06}.png", config.image_dir, name, step)))
            .collect();
        dataset.push((name.clone(), records));
        assets.push((name, images));
    }

    SessionData::new(
        dataset.into_iter().collect::<Dataset>(),
        assets.into_iter().collect::<VisualAssets>(),
    )
    .context("assembling synthetic session data")
}

#[cfg(test)]
pub fn build_session(models: usize, steps: usize, seed: u64) -> anyhow::Result<SessionData> {
    let config = GeneratorConfig {
        models,
        heating_steps: steps / 2,
        cooling_steps: steps - steps / 2,
        seed,
        ..Default::default()
    };
    build_session_from_config(&config)
}
