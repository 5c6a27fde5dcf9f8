//! UFO and designspace loading
//!
//! Reads each master UFO with norad and converts its default layer into
//! the owned [`Font`] model. Glyphs are merged across masters by name in
//! first-seen order.

use kurbo::{Affine, Point};
use norad::designspace::DesignSpaceDocument;
use std::collections::HashMap;
use std::path::{Path as FsPath, PathBuf};
use tracing::{debug, info, warn};

use super::data::{Font, Glyph, Layer, Node, NodeKind, Path};
use super::metrics::master_from_font_info;
use crate::error::AuditError;

/// Nested component references deeper than this are dropped
const MAX_COMPONENT_DEPTH: usize = 8;

/// Load a font family from a `.designspace` file or a single `.ufo`
pub fn load_font(path: &FsPath) -> Result<Font, AuditError> {
    match path.extension().and_then(|s| s.to_str()) {
        Some("designspace") => load_designspace(path),
        Some("ufo") if path.is_dir() => load_masters(&[path.to_path_buf()]),
        _ => Err(AuditError::UnsupportedSource(path.to_path_buf())),
    }
}

/// Load a single designspace/UFO, or several UFOs as one family
pub fn load_sources(paths: &[PathBuf]) -> Result<Font, AuditError> {
    match paths {
        [single] => load_font(single),
        many => load_masters(many),
    }
}

/// Load every source of a designspace as a master
pub fn load_designspace(path: &FsPath) -> Result<Font, AuditError> {
    let designspace = DesignSpaceDocument::load(path).map_err(|e| AuditError::DesignSpace {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let designspace_dir = path.parent().unwrap_or_else(|| FsPath::new("."));

    let mut masters = Vec::with_capacity(designspace.sources.len());
    for source in &designspace.sources {
        let ufo_path = designspace_dir.join(&source.filename);
        let name = source
            .stylename
            .clone()
            .unwrap_or_else(|| file_stem(&ufo_path));
        masters.push((name, ufo_path));
    }
    load_named_masters(&masters)
}

/// Load several UFOs, one master each, named by their style name
pub fn load_masters(paths: &[PathBuf]) -> Result<Font, AuditError> {
    let mut masters = Vec::with_capacity(paths.len());
    for path in paths {
        let ufo = norad::Font::load(path)?;
        let name = ufo
            .font_info
            .style_name
            .clone()
            .unwrap_or_else(|| file_stem(path));
        masters.push((name, ufo));
    }
    Ok(font_from_ufos(masters))
}

fn load_named_masters(sources: &[(String, PathBuf)]) -> Result<Font, AuditError> {
    let mut masters = Vec::with_capacity(sources.len());
    for (name, path) in sources {
        debug!("Loading master '{}' from {}", name, path.display());
        masters.push((name.clone(), norad::Font::load(path)?));
    }
    Ok(font_from_ufos(masters))
}

/// Convert loaded UFOs into one multi-master [`Font`]
pub fn font_from_ufos(ufos: Vec<(String, norad::Font)>) -> Font {
    let mut font = Font::default();
    let mut index: HashMap<String, usize> = HashMap::new();

    for (name, ufo) in &ufos {
        if font.master(name).is_some() {
            warn!("Duplicate master name '{}', later source shares its metrics", name);
        } else {
            font.masters.push(master_from_font_info(name.clone(), &ufo.font_info));
        }

        let layer = ufo.default_layer();
        for glyph in layer.iter() {
            let converted = convert_layer(name, glyph, layer);
            let glyph_name = glyph.name().to_string();
            match index.get(&glyph_name) {
                Some(&i) => font.glyphs[i].layers.push(converted),
                None => {
                    index.insert(glyph_name.clone(), font.glyphs.len());
                    font.glyphs.push(Glyph {
                        string: display_string(glyph),
                        id: glyph_name,
                        layers: vec![converted],
                    });
                }
            }
        }
    }

    info!(
        "Loaded {} glyphs across {} masters",
        font.glyphs.len(),
        font.masters.len()
    );
    font
}

/// First code point of the glyph, or its name when unencoded
fn display_string(glyph: &norad::Glyph) -> String {
    glyph
        .codepoints
        .iter()
        .next()
        .map(String::from)
        .unwrap_or_else(|| glyph.name().to_string())
}

fn convert_layer(master: &str, glyph: &norad::Glyph, layer: &norad::Layer) -> Layer {
    let mut paths = Vec::new();
    collect_paths(glyph, layer, Affine::IDENTITY, 0, &mut paths);
    Layer::new(master, glyph.width, paths)
}

/// Append the glyph's contours and its decomposed components
fn collect_paths(
    glyph: &norad::Glyph,
    layer: &norad::Layer,
    transform: Affine,
    depth: usize,
    paths: &mut Vec<Path>,
) {
    paths.extend(
        glyph
            .contours
            .iter()
            .map(|contour| convert_contour(contour, transform)),
    );

    if depth >= MAX_COMPONENT_DEPTH {
        if !glyph.components.is_empty() {
            warn!("Component nesting too deep in '{}', skipping", glyph.name());
        }
        return;
    }

    for component in &glyph.components {
        let Some(base) = layer.get_glyph(&component.base) else {
            warn!(
                "Glyph '{}' references missing component '{}'",
                glyph.name(),
                component.base
            );
            continue;
        };
        let t = &component.transform;
        let affine = Affine::new([
            t.x_scale, t.xy_scale, t.yx_scale, t.y_scale, t.x_offset, t.y_offset,
        ]);
        collect_paths(base, layer, transform * affine, depth + 1, paths);
    }
}

fn convert_contour(contour: &norad::Contour, transform: Affine) -> Path {
    let nodes = contour
        .points
        .iter()
        .map(|point| Node {
            position: transform * Point::new(point.x, point.y),
            kind: node_kind(&point.typ),
        })
        .collect();
    Path::new(nodes)
}

fn node_kind(typ: &norad::PointType) -> NodeKind {
    match typ {
        norad::PointType::Move => NodeKind::Move,
        norad::PointType::Line => NodeKind::Line,
        norad::PointType::OffCurve => NodeKind::OffCurve,
        norad::PointType::Curve => NodeKind::Curve,
        norad::PointType::QCurve => NodeKind::QCurve,
    }
}

fn file_stem(path: &FsPath) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
