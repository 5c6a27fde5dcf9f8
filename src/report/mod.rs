//! Report assembly and output
//!
//! Gathers side bearings, outermost stroke ranges and ranking scores into
//! one serializable [`Report`]:
//! - `glyphs`: per glyph and weight, side bearings plus the outermost
//!   range for each reported direction
//! - `stroke_sheets`: per direction, one row per labeled glyph
//! - `rankings`: Kendall's tau for every pair of weights
//! - `unlabeled`: glyphs skipped because the label file has no entry

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::info;

use crate::analysis::labels::warn_missing;
use crate::analysis::{dist_between_rankings, RankingDistance, SideBearingTable, SideBearings, StrokeLabels};
use crate::font_source::{Font, Glyph};
use crate::geometry::{get_outermost_range, Direction, OutermostRange};

/// What goes into the report
#[derive(Clone, Debug, PartialEq)]
pub struct ReportOptions {
    /// Report ranges in every direction, not only labeled ones
    pub all_ranges: bool,
    /// Directions to compute ranking scores for
    pub rank_directions: Vec<Direction>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            all_ranges: false,
            rank_directions: vec![Direction::Lsb],
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct Report {
    pub generated_at: String,
    pub weights: Vec<String>,
    pub glyphs: Vec<GlyphReport>,
    pub stroke_sheets: Vec<StrokeSheet>,
    pub rankings: Vec<RankingReport>,
    pub unlabeled: Vec<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct GlyphReport {
    pub id: String,
    pub string: String,
    pub weights: Vec<WeightReport>,
}

#[derive(Clone, Debug, Serialize)]
pub struct WeightReport {
    pub weight: String,
    /// `None` when the glyph is not drawn in this weight
    pub side_bearings: Option<SideBearings>,
    /// Outermost (min, max) per reported direction, `None` when nothing
    /// reaches the boundary
    pub ranges: BTreeMap<Direction, Option<(f64, f64)>>,
}

#[derive(Clone, Debug, Serialize)]
pub struct StrokeSheet {
    pub direction: Direction,
    pub rows: Vec<StrokeRow>,
}

#[derive(Clone, Debug, Serialize)]
pub struct StrokeRow {
    pub id: String,
    pub string: String,
    pub label: String,
    pub cells: Vec<StrokeCell>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StrokeCell {
    pub weight: String,
    pub side_bearing: Option<f64>,
    pub stroke_count: usize,
    pub range_min: Option<f64>,
    pub range_max: Option<f64>,
}

#[derive(Clone, Debug, Serialize)]
pub struct RankingReport {
    pub direction: Direction,
    pub scores: Vec<RankingDistance>,
}

/// Build the full report. Without `labels`, stroke sheets are empty and
/// ranges are only reported when `all_ranges` is set.
pub fn build(
    font: &Font,
    table: &SideBearingTable,
    labels: Option<&StrokeLabels>,
    options: &ReportOptions,
) -> Report {
    let by_id: HashMap<&str, &Glyph> = font.glyphs.iter().map(|g| (g.id.as_str(), g)).collect();
    let unlabeled = labels
        .map(|l| l.missing(table.glyphs().iter().map(|g| g.string.as_str())))
        .unwrap_or_default();
    warn_missing(&unlabeled);

    let mut glyphs = Vec::with_capacity(table.glyphs().len());
    let mut sheets: BTreeMap<Direction, Vec<StrokeRow>> = BTreeMap::new();

    for record in table.glyphs() {
        let glyph = by_id.get(record.id.as_str()).copied();
        let labeled = labels.map(|l| l.directions(&record.string)).unwrap_or_default();
        let reported = if options.all_ranges {
            Direction::ALL.to_vec()
        } else {
            labeled.clone()
        };

        // Scan each (weight, direction) once; both the glyph record and
        // the stroke sheets read from here
        let mut scans: HashMap<(&str, Direction), Option<OutermostRange>> = HashMap::new();
        for weight in table.weights() {
            let layer = glyph.and_then(|g| g.layer(weight));
            for direction in reported.iter().chain(&labeled) {
                scans
                    .entry((weight.as_str(), *direction))
                    .or_insert_with(|| layer.and_then(|l| get_outermost_range(l, *direction)));
            }
        }

        let weights = table
            .weights()
            .iter()
            .map(|weight| WeightReport {
                weight: weight.clone(),
                side_bearings: record.weights.get(weight).copied(),
                ranges: reported
                    .iter()
                    .map(|d| (*d, scans[&(weight.as_str(), *d)].as_ref().map(OutermostRange::pair)))
                    .collect(),
            })
            .collect();
        glyphs.push(GlyphReport {
            id: record.id.clone(),
            string: record.string.clone(),
            weights,
        });

        for direction in &labeled {
            let label = labels
                .and_then(|l| l.label(&record.string, *direction))
                .map(|v| v.text().to_string())
                .unwrap_or_default();
            let cells = table
                .weights()
                .iter()
                .map(|weight| {
                    let range = scans[&(weight.as_str(), *direction)].as_ref();
                    StrokeCell {
                        weight: weight.clone(),
                        side_bearing: record.weights.get(weight).map(|sb| sb.get(*direction)),
                        stroke_count: range.map_or(0, |r| r.strokes.len()),
                        range_min: range.map(|r| r.min),
                        range_max: range.map(|r| r.max),
                    }
                })
                .collect();
            sheets.entry(*direction).or_default().push(StrokeRow {
                id: record.id.clone(),
                string: record.string.clone(),
                label,
                cells,
            });
        }
    }

    let rankings = options
        .rank_directions
        .iter()
        .map(|direction| RankingReport {
            direction: *direction,
            scores: dist_between_rankings(table, *direction),
        })
        .collect();

    let stroke_sheets: Vec<StrokeSheet> = Direction::ALL
        .into_iter()
        .map(|direction| StrokeSheet {
            direction,
            rows: sheets.remove(&direction).unwrap_or_default(),
        })
        .collect();

    info!(
        "Report covers {} glyphs, {} stroke rows, {} unlabeled",
        glyphs.len(),
        stroke_sheets.iter().map(|s| s.rows.len()).sum::<usize>(),
        unlabeled.len()
    );

    Report {
        generated_at: chrono::Utc::now().to_rfc3339(),
        weights: table.weights().to_vec(),
        glyphs,
        stroke_sheets,
        rankings,
        unlabeled,
    }
}

/// Write the report as JSON to `output`, or stdout when `None`
pub fn write_json(report: &Report, output: Option<&Path>, pretty: bool) -> io::Result<()> {
    match output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            write_to(&mut writer, report, pretty)?;
            writer.flush()?;
            info!("Wrote report to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_to(&mut writer, report, pretty)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}

fn write_to<W: Write>(writer: &mut W, report: &Report, pretty: bool) -> io::Result<()> {
    if pretty {
        serde_json::to_writer_pretty(writer, report)?;
    } else {
        serde_json::to_writer(writer, report)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::read_side_bearings;
    use crate::font_source::{Layer, Master, Node, Path as GlyphPath};

    fn stem_layer(master: &str, x: f64, width: f64) -> Layer {
        Layer::new(
            master,
            width,
            // Starts on the right edge so the left edge is one unbroken run
            vec![GlyphPath::new(vec![
                Node::on_curve(x + 80.0, 0.0),
                Node::on_curve(x + 80.0, 700.0),
                Node::on_curve(x, 700.0),
                Node::on_curve(x, 0.0),
            ])],
        )
    }

    fn font() -> Font {
        let masters = ["Light", "Bold"]
            .into_iter()
            .map(|name| Master {
                name: name.into(),
                ascender: 800.0,
                descender: -200.0,
            })
            .collect();
        let glyph = |id: &str, light: Option<f64>, bold: f64| Glyph {
            id: id.into(),
            string: id.into(),
            layers: vec![
                match light {
                    Some(x) => stem_layer("Light", x, 300.0),
                    None => Layer::new("Light", 300.0, vec![]),
                },
                stem_layer("Bold", bold, 320.0),
            ],
        };
        Font {
            masters,
            glyphs: vec![glyph("l", Some(50.0), 60.0), glyph("i", None, 70.0)],
        }
    }

    fn weights() -> Vec<String> {
        vec!["Light".into(), "Bold".into()]
    }

    #[test]
    fn test_stroke_sheet_rows_follow_labels() {
        let font = font();
        let table = read_side_bearings(&font, &weights()).unwrap();
        let labels = StrokeLabels::from_json(r#"{ "l": { "lsb": "stem" } }"#).unwrap();
        let report = build(&font, &table, Some(&labels), &ReportOptions::default());

        assert_eq!(report.unlabeled, vec!["i".to_string()]);
        let lsb = &report.stroke_sheets[0];
        assert_eq!(lsb.direction, Direction::Lsb);
        assert_eq!(lsb.rows.len(), 1);
        assert_eq!(lsb.rows[0].label, "stem");
        assert_eq!(
            lsb.rows[0].cells[0],
            StrokeCell {
                weight: "Light".into(),
                side_bearing: Some(50.0),
                stroke_count: 1,
                range_min: Some(0.0),
                range_max: Some(700.0),
            }
        );
        assert!(report.stroke_sheets[1..].iter().all(|s| s.rows.is_empty()));

        // Only the labeled direction is reported as a range
        let l = &report.glyphs[0];
        assert_eq!(l.weights[0].ranges.len(), 1);
        assert_eq!(l.weights[0].ranges[&Direction::Lsb], Some((0.0, 700.0)));
    }

    #[test]
    fn test_all_ranges_marks_undrawn_layers_absent() {
        let font = font();
        let table = read_side_bearings(&font, &weights()).unwrap();
        let options = ReportOptions {
            all_ranges: true,
            rank_directions: vec![Direction::Lsb, Direction::Rsb],
        };
        let report = build(&font, &table, None, &options);

        assert!(report.unlabeled.is_empty());
        let i = report.glyphs.iter().find(|g| g.id == "i").unwrap();
        let light = &i.weights[0];
        assert!(light.side_bearings.is_none());
        assert_eq!(light.ranges.len(), 4);
        assert!(light.ranges.values().all(Option::is_none));
        assert_eq!(i.weights[1].ranges[&Direction::Tsb], Some((70.0, 150.0)));

        assert_eq!(report.rankings.len(), 2);
        // "i" is undrawn in Light, leaving one common glyph
        assert_eq!(report.rankings[0].scores[0].common, 1);
        assert_eq!(report.rankings[0].scores[0].tau, None);
    }

    #[test]
    fn test_report_serializes_absence_as_null() {
        let font = font();
        let table = read_side_bearings(&font, &weights()).unwrap();
        let report = build(&font, &table, None, &ReportOptions::default());
        let mut out = Vec::new();
        write_to(&mut out, &report, false).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["glyphs"][1]["weights"][0]["side_bearings"], serde_json::Value::Null);
        assert_eq!(value["glyphs"][0]["weights"][1]["side_bearings"]["lsb"], 60.0);
        assert_eq!(value["stroke_sheets"][2]["direction"], "tsb");
    }
}
