//! Writes a synthetic artifact set under `output/` so the viewer can be
//! tried without the offline embedding and clustering pipeline. Honours
//! `CLUSTER_VIEWER_ROOT` like the viewer does.

use std::f64::consts::PI;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use image::{Rgb, RgbImage};
use palette::{Hsl, IntoColor, Srgb};
use serde::Serialize;

#[path = "../config.rs"]
mod config;

use config::ArtifactPaths;

const PAPERS_PER_CLUSTER: usize = 24;
const IMAGE_SIZE: u32 = 640;

const TOPICS: [(&str, [&str; 5]); 5] = [
    ("Neural Machine Translation", ["translation", "attention", "encoder", "decoder", "bleu"]),
    ("Pretrained Language Models", ["bert", "pretraining", "transformer", "finetuning", "masked"]),
    ("Graph Representation Learning", ["graph", "gcn", "node", "citation", "embedding"]),
    ("Sentiment Analysis", ["sentiment", "opinion", "review", "polarity", "aspect"]),
    ("Question Answering", ["question", "answer", "reading", "retrieval", "squad"]),
];

/// One CSV row, in the column order the viewer expects.
#[derive(Serialize)]
struct PaperRow {
    title: String,
    year: i64,
    #[serde(rename = "citationCount")]
    citation_count: u64,
    cluster_combined: usize,
    graph_degree: u32,
    umap_x: f64,
    umap_y: f64,
}

/// splitmix64; deterministic so repeated runs produce identical files.
struct SampleRng(u64);

impl SampleRng {
    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    fn unit(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.unit().max(1e-15);
        let u2 = self.unit();
        mean + std_dev * (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
    }

    fn below(&mut self, n: u64) -> u64 {
        self.next_u64() % n
    }
}

fn generate_papers(rng: &mut SampleRng) -> Vec<PaperRow> {
    let mut rows = Vec::new();
    for i in 0..PAPERS_PER_CLUSTER {
        for (cluster, (topic, words)) in TOPICS.iter().enumerate() {
            let angle = cluster as f64 / TOPICS.len() as f64 * 2.0 * PI;
            let word = words[rng.below(words.len() as u64) as usize];
            rows.push(PaperRow {
                title: format!("{topic}: revisiting {word} (part {})", i + 1),
                year: 2012 + rng.below(12) as i64,
                citation_count: rng.gauss(40.0, 30.0).abs().round() as u64,
                cluster_combined: cluster,
                graph_degree: 1 + rng.below(30) as u32,
                umap_x: rng.gauss(angle.cos() * 6.0, 1.0),
                umap_y: rng.gauss(angle.sin() * 6.0, 1.0),
            });
        }
    }
    rows
}

fn write_papers(path: &Path, rows: &[PaperRow]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).context("creating papers CSV")?;
    for row in rows {
        writer.serialize(row).context("writing paper row")?;
    }
    writer.flush().context("flushing papers CSV")?;
    Ok(())
}

fn write_keywords(path: &Path) -> Result<()> {
    let mut map = serde_json::Map::new();
    for (cluster, (_, words)) in TOPICS.iter().enumerate() {
        map.insert(cluster.to_string(), serde_json::json!(words));
    }
    let text = serde_json::to_string_pretty(&map).context("serialising keywords")?;
    fs::write(path, text).context("writing keywords JSON")
}

/// Scatter of the synthetic 2-D coordinates, one hue per cluster.
fn write_scatter(path: &Path, rows: &[PaperRow]) -> Result<()> {
    let mut img = RgbImage::from_pixel(IMAGE_SIZE, IMAGE_SIZE, Rgb([255, 255, 255]));
    let scale = IMAGE_SIZE as f64 / 20.0;
    let center = IMAGE_SIZE as f64 / 2.0;

    for row in rows {
        let hue = row.cluster_combined as f32 / TOPICS.len() as f32 * 360.0;
        let rgb: Srgb = Hsl::new(hue, 0.65, 0.5).into_color();
        let color = Rgb([
            (rgb.red * 255.0) as u8,
            (rgb.green * 255.0) as u8,
            (rgb.blue * 255.0) as u8,
        ]);
        let cx = (center + row.umap_x * scale) as i64;
        let cy = (center - row.umap_y * scale) as i64;
        for dx in -3..=3i64 {
            for dy in -3..=3i64 {
                if dx * dx + dy * dy > 9 {
                    continue;
                }
                let (x, y) = (cx + dx, cy + dy);
                if (0..IMAGE_SIZE as i64).contains(&x) && (0..IMAGE_SIZE as i64).contains(&y) {
                    img.put_pixel(x as u32, y as u32, color);
                }
            }
        }
    }

    img.save(path).context("writing scatter PNG")
}

/// Write all three artifacts at `paths`; returns the number of papers.
fn generate(paths: &ArtifactPaths) -> Result<usize> {
    let mut rng = SampleRng(42);
    let rows = generate_papers(&mut rng);

    for file in [&paths.papers, &paths.keywords, &paths.visualization] {
        if let Some(dir) = file.parent() {
            fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
        }
    }

    write_papers(&paths.papers, &rows)?;
    write_keywords(&paths.keywords)?;
    write_scatter(&paths.visualization, &rows)?;
    Ok(rows.len())
}

fn main() -> Result<()> {
    env_logger::init();

    let paths = ArtifactPaths::from_env();
    let papers = generate(&paths)?;

    println!(
        "Wrote {papers} papers in {} clusters to {}, {} and {}",
        TOPICS.len(),
        paths.papers.display(),
        paths.keywords.display(),
        paths.visualization.display()
    );
    Ok(())
}
