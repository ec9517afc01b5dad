use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;

use vibrospec::color::{generate_palette, Rgb, IR_RED};
use vibrospec::data::extract::extract;
use vibrospec::spectrum::broaden::{broaden, BroadenOptions};
use vibrospec::spectrum::export::to_csv;
use vibrospec::spectrum::render::{render_png, render_stick_png, PlotOptions};
use vibrospec::SpectrumKind;

#[derive(Parser)]
#[command(name = "vibrospec")]
#[command(about = "Extract and plot IR/Raman vibrational spectra from quantum-chemistry logs", long_about = None)]
struct Cli {
    /// Frequency-calculation output log to analyze
    input: PathBuf,

    /// Directory for the exported PNG/CSV artifacts
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Base name for artifacts (defaults to the input file stem)
    #[arg(long)]
    stem: Option<String>,

    /// Plot line color (#RRGGBB or a named color), applied to every spectrum
    #[arg(short, long)]
    color: Option<String>,

    /// Gaussian broadening width in cm^-1
    #[arg(long, default_value_t = 10.0)]
    sigma: f64,

    /// Number of samples across the broadened curve
    #[arg(long, default_value_t = 1000)]
    points: usize,

    /// Also export stick (stem) plots of the discrete lines
    #[arg(long)]
    sticks: bool,

    /// Skip CSV export
    #[arg(long)]
    no_csv: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    // 1) Read + extract. Decoding is lossy on purpose: stray bytes in a
    // multi-megabyte log should not block reading the marker lines.
    let bytes =
        fs::read(&cli.input).with_context(|| format!("reading {}", cli.input.display()))?;
    let text = String::from_utf8_lossy(&bytes);
    let doc = extract(&text);

    log::info!(
        "extracted {} frequencies, {} IR / {} Raman intensities, atom count {}",
        doc.frequencies.len(),
        doc.ir_intensities.len(),
        doc.raman_intensities.len(),
        doc.atom_count
    );
    if !doc.counts_consistent() {
        log::warn!("frequency and intensity counts disagree; unmatched trailing values are dropped");
    }
    if !doc.has_data() {
        bail!(
            "no vibrational frequency or intensity data found in {}",
            cli.input.display()
        );
    }

    // 2) Collect the spectra worth plotting.
    let mut spectra = Vec::new();
    let ir = doc.ir();
    if ir.is_empty() {
        log::warn!("no IR intensities parsed; skipping the IR spectrum");
    } else {
        spectra.push(ir);
    }
    match doc.raman() {
        Some(raman) if raman.is_empty() => {
            log::warn!("Raman markers present but no activities parsed; skipping the Raman spectrum");
        }
        Some(raman) => spectra.push(raman),
        None => {}
    }
    if spectra.is_empty() {
        bail!(
            "frequencies were found in {} but no intensities could be paired with them",
            cli.input.display()
        );
    }

    let stem = cli.stem.clone().unwrap_or_else(|| {
        cli.input
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("spectrum")
            .to_string()
    });
    fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("creating {}", cli.out_dir.display()))?;

    let explicit_color = cli.color.as_deref().map(Rgb::parse).transpose()?;
    let palette = generate_palette(spectra.len());
    let broaden_opts = BroadenOptions {
        sigma: cli.sigma,
        num_points: cli.points,
    };

    // 3) Broaden, render, export.
    for (i, spectrum) in spectra.iter().enumerate() {
        let color = explicit_color.unwrap_or(if spectrum.kind == SpectrumKind::Ir {
            IR_RED
        } else {
            palette[i]
        });
        let plot_opts = PlotOptions {
            label: spectrum.kind.to_string(),
            color,
            ..Default::default()
        };

        let curve = broaden(&spectrum.lines, &broaden_opts)
            .with_context(|| format!("broadening the {} spectrum", spectrum.kind))?;
        let png = render_png(&curve, &plot_opts)
            .with_context(|| format!("rendering the {} spectrum", spectrum.kind))?;
        write_artifact(&cli.out_dir, &stem, spectrum.kind.file_tag(), "png", &png)?;

        if cli.sticks {
            let stick_png = render_stick_png(spectrum, &plot_opts)
                .with_context(|| format!("rendering {} sticks", spectrum.kind))?;
            let tag = format!("{}_sticks", spectrum.kind.file_tag());
            write_artifact(&cli.out_dir, &stem, &tag, "png", &stick_png)?;
        }

        if !cli.no_csv {
            let csv = to_csv(spectrum)
                .with_context(|| format!("exporting the {} table", spectrum.kind))?;
            write_artifact(&cli.out_dir, &stem, spectrum.kind.file_tag(), "csv", &csv)?;
        }
    }

    Ok(())
}

fn write_artifact(out_dir: &Path, stem: &str, tag: &str, ext: &str, bytes: &[u8]) -> Result<()> {
    let path = out_dir.join(format!("{stem}_{tag}.{ext}"));
    fs::write(&path, bytes).with_context(|| format!("writing {}", path.display()))?;
    println!("Wrote {}", path.display());
    Ok(())
}
