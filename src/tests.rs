#[cfg(test)]
mod scenario_tests {
    use crate::analysis::read_side_bearings;
    use crate::font_source::{Font, Glyph, Layer, Master, Node, Path};
    use crate::geometry::{scan, Direction};

    #[test]
    fn test_sidebearings_worked_example() {
        // bounds origin (10, 20), size (100, 200), advance 150,
        // descender -50, ascender 750
        let layer = Layer::new(
            "Regular",
            150.0,
            vec![Path::new(vec![
                Node::on_curve(10.0, 20.0),
                Node::on_curve(110.0, 20.0),
                Node::on_curve(110.0, 220.0),
                Node::on_curve(10.0, 220.0),
            ])],
        );
        let font = Font {
            masters: vec![Master {
                name: "Regular".into(),
                ascender: 750.0,
                descender: -50.0,
            }],
            glyphs: vec![Glyph {
                id: "glyph00001".into(),
                string: "口".into(),
                layers: vec![layer],
            }],
        };

        let table = read_side_bearings(&font, &["Regular".to_string()]).unwrap();
        let sb = table.get("Regular", "口").unwrap();
        assert_eq!(sb.lsb, 10.0);
        assert_eq!(sb.rsb, 40.0);
        assert_eq!(sb.bsb, 70.0);
        assert_eq!(sb.tsb, 530.0);
        assert_eq!(table.glyph("口").unwrap().id, "glyph00001");
    }

    #[test]
    fn test_split_tie_yields_two_strokes() {
        // x = 0, 5, 0: the middle node closes the first run
        let layer = Layer::new(
            "Regular",
            100.0,
            vec![Path::new(vec![
                Node::on_curve(0.0, 10.0),
                Node::on_curve(5.0, 20.0),
                Node::on_curve(0.0, 30.0),
            ])],
        );
        let result = scan(&layer, Direction::Lsb);
        assert_eq!(result.record, 0.0);
        assert_eq!(result.midpoints(), vec![10.0, 30.0]);
    }

    #[test]
    fn test_no_qualifying_nodes() {
        let layer = Layer::new(
            "Regular",
            100.0,
            vec![Path::new(vec![Node::off_curve(3.0, 4.0)])],
        );
        for direction in Direction::ALL {
            let result = scan(&layer, direction);
            assert_eq!(result.record, 0.0);
            assert!(result.strokes.is_empty());
        }
    }
}

#[cfg(test)]
mod ufo_tests {
    use crate::core::{audit, AuditConfig};
    use crate::font_source::ufo::{load_font, load_masters};
    use crate::geometry::Direction;
    use crate::report::ReportOptions;
    use norad::{Contour, ContourPoint, PointType};
    use std::path::{Path, PathBuf};

    /// A stem glyph whose left edge sits at `x`
    fn stem(name: &str, codepoint: char, x: f64, width: f64) -> norad::Glyph {
        let mut glyph = norad::Glyph::new(name);
        glyph.width = width;
        glyph.codepoints.insert(codepoint);
        let point = |x, y| ContourPoint::new(x, y, PointType::Line, false, None, None);
        glyph.contours.push(Contour::new(
            vec![
                point(x + 80.0, 0.0),
                point(x + 80.0, 700.0),
                point(x, 700.0),
                point(x, 0.0),
            ],
            None,
        ));
        glyph
    }

    fn write_master(dir: &Path, style: &str, offsets: &[(&str, char, f64)]) -> PathBuf {
        let mut font = norad::Font::new();
        font.font_info.style_name = Some(style.to_string());
        font.font_info.ascender = Some(800.0);
        font.font_info.descender = Some(-200.0);
        for (name, codepoint, x) in offsets {
            font.default_layer_mut()
                .insert_glyph(stem(name, *codepoint, *x, 300.0));
        }
        let path = dir.join(format!("{style}.ufo"));
        font.save(&path).expect("Failed to save test UFO");
        path
    }

    #[test]
    fn test_audit_ufo_masters() {
        let dir = tempfile::tempdir().unwrap();
        let light = write_master(dir.path(), "Light", &[("a", 'a', 40.0), ("b", 'b', 60.0)]);
        let bold = write_master(dir.path(), "Bold", &[("a", 'a', 30.0), ("b", 'b', 50.0)]);
        let labels = dir.path().join("labels.json");
        std::fs::write(&labels, r#"{ "a": { "lsb": "stem" } }"#).unwrap();

        let config = AuditConfig {
            sources: vec![light, bold],
            weights: vec!["Light".into(), "Bold".into()],
            labels: Some(labels),
            report: ReportOptions::default(),
            output: None,
            pretty: false,
        };
        let report = audit(&config).unwrap();

        assert_eq!(report.weights, vec!["Light", "Bold"]);
        assert_eq!(report.glyphs.len(), 2);
        assert_eq!(report.unlabeled, vec!["b".to_string()]);

        let rows = &report.stroke_sheets[0].rows;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].cells[1].side_bearing, Some(30.0));
        assert_eq!(rows[0].cells[1].stroke_count, 1);

        // Both weights order b before a by lsb
        let scores = &report.rankings[0].scores;
        assert_eq!(report.rankings[0].direction, Direction::Lsb);
        assert_eq!(scores.len(), 1);
        assert_eq!(scores[0].tau, Some(1.0));
    }

    #[test]
    fn test_load_designspace_sources() {
        let dir = tempfile::tempdir().unwrap();
        write_master(dir.path(), "Light", &[("a", 'a', 40.0)]);
        write_master(dir.path(), "Bold", &[("a", 'a', 30.0)]);
        let designspace = dir.path().join("Family.designspace");
        std::fs::write(
            &designspace,
            r#"<?xml version='1.0' encoding='UTF-8'?>
<designspace format="4.1">
  <axes>
    <axis tag="wght" name="Weight" minimum="300" maximum="700" default="300"/>
  </axes>
  <sources>
    <source filename="Light.ufo" name="master.Light" familyname="Test" stylename="Light">
      <location>
        <dimension name="Weight" xvalue="300"/>
      </location>
    </source>
    <source filename="Bold.ufo" name="master.Bold" familyname="Test" stylename="Bold">
      <location>
        <dimension name="Weight" xvalue="700"/>
      </location>
    </source>
  </sources>
</designspace>
"#,
        )
        .unwrap();

        let font = load_font(&designspace).unwrap();
        let names: Vec<&str> = font.masters.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Light", "Bold"]);
        let glyph = font.glyph("a").unwrap();
        assert_eq!(glyph.layer("Bold").unwrap().bounds.map(|b| b.x0), Some(30.0));
    }

    #[test]
    fn test_master_name_falls_back_to_file_stem() {
        let dir = tempfile::tempdir().unwrap();
        let mut font = norad::Font::new();
        font.default_layer_mut().insert_glyph(stem("a", 'a', 10.0, 200.0));
        let path = dir.path().join("Untitled-Heavy.ufo");
        font.save(&path).unwrap();

        let loaded = load_masters(&[path]).unwrap();
        assert_eq!(loaded.masters[0].name, "Untitled-Heavy");
        // No vertical metrics in fontinfo: UPM based defaults
        assert_eq!(loaded.masters[0].ascender, 800.0);
    }
}
