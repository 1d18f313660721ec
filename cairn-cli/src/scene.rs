//! JSON tile scene parsing.
//!
//! A scene file is the serialized form of what the upstream pipeline
//! would normally hand the rasterizer in memory: one tile, a
//! background color, way geometry bucketed by (layer, level), and
//! point symbols with priorities. Parsing converts it into the core
//! draw structures; invalid entries fail with a located error instead
//! of being skipped.

use std::collections::HashSet;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use cairn_graphics::{Bitmap, Color, LineCap, Paint, Style};
use cairn_model::{Point, Tile};
use cairn_render::{MapElement, Shape, ShapePaint, SymbolElement, WayDrawList};

/// A whole tile scene as read from JSON.
#[derive(Debug, Deserialize)]
pub struct Scene {
    /// The tile being rendered.
    tile: TileSpec,
    /// Background fill; omitted or transparent backgrounds skip the
    /// fill entirely.
    background: Option<String>,
    /// Levels per layer; every way's `level` must be below this.
    levels: usize,
    /// Way geometry in upstream insertion order.
    #[serde(default)]
    ways: Vec<WaySpec>,
    /// Point symbols with overlap priorities.
    #[serde(default)]
    symbols: Vec<SymbolSpec>,
}

#[derive(Debug, Deserialize)]
struct TileSpec {
    x: u32,
    y: u32,
    zoom: u8,
    size: u32,
}

#[derive(Debug, Deserialize)]
struct WaySpec {
    layer: usize,
    level: usize,
    #[serde(flatten)]
    geometry: GeometrySpec,
    color: String,
    #[serde(default)]
    width: f32,
    #[serde(default)]
    fill: bool,
    #[serde(default)]
    round_cap: bool,
    #[serde(default)]
    dy: f64,
    #[serde(default)]
    dash: Option<Vec<f32>>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum GeometrySpec {
    Circle {
        center: [f64; 2],
        radius: f64,
    },
    Polyline {
        rings: Vec<Vec<[f64; 2]>>,
    },
}

#[derive(Debug, Deserialize)]
struct SymbolSpec {
    x: f64,
    y: f64,
    priority: i32,
    color: String,
    size: u32,
}

/// Everything the rasterizer needs for one tile draw sequence.
#[derive(Debug)]
pub struct TileDraw {
    /// The tile address.
    pub tile: Tile,
    /// Background fill color.
    pub background: Color,
    /// Way geometry ordered for drawing.
    pub ways: WayDrawList,
    /// Deduplicated map elements.
    pub elements: HashSet<MapElement>,
}

impl Scene {
    /// Parse a scene from JSON text.
    ///
    /// # Errors
    /// Returns an error if the JSON is malformed.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("failed to parse scene JSON")
    }

    /// Replace the tile edge length.
    ///
    /// Must be called before [`into_tile_draw`](Self::into_tile_draw):
    /// lowering bakes symbol anchors into absolute map pixels using
    /// the tile size, so a later change would shift them off their
    /// tile-local positions.
    pub fn set_tile_size(&mut self, size: u32) {
        self.tile.size = size;
    }

    /// Lower the scene into the core draw structures.
    ///
    /// # Errors
    /// Returns an error for unparseable colors or out-of-range
    /// layer/level assignments.
    pub fn into_tile_draw(self) -> Result<TileDraw> {
        let tile = Tile::new(self.tile.x, self.tile.y, self.tile.zoom, self.tile.size);

        let background = match &self.background {
            Some(text) => parse_color(text)?,
            None => Color::TRANSPARENT,
        };

        let layer_count = self
            .ways
            .iter()
            .map(|way| way.layer + 1)
            .max()
            .unwrap_or(0);
        let mut ways = WayDrawList::with_dimensions(layer_count, self.levels);

        for (index, way) in self.ways.into_iter().enumerate() {
            if way.level >= self.levels {
                bail!(
                    "way {index}: level {} out of range (scene has {} levels)",
                    way.level,
                    self.levels
                );
            }
            let (layer, level, shape_paint) = way
                .into_shape_paint()
                .with_context(|| format!("way {index}"))?;
            ways.push(layer, level, shape_paint);
        }

        let origin = tile.origin();
        let mut elements = HashSet::new();
        for (index, symbol) in self.symbols.into_iter().enumerate() {
            let color =
                parse_color(&symbol.color).with_context(|| format!("symbol {index}"))?;
            let anchor = origin.offset(symbol.x, symbol.y);
            let bitmap = Bitmap::filled(symbol.size.max(1), symbol.size.max(1), color);
            let _ = elements.insert(MapElement::new(
                anchor,
                symbol.priority,
                Arc::new(SymbolElement::new(bitmap)),
            ));
        }

        Ok(TileDraw {
            tile,
            background,
            ways,
            elements,
        })
    }
}

impl WaySpec {
    fn into_shape_paint(self) -> Result<(usize, usize, ShapePaint)> {
        let color = parse_color(&self.color)?;
        let mut paint = if self.fill {
            Paint::fill(color)
        } else {
            Paint::stroke(color, self.width)
        };
        if self.round_cap && paint.style == Style::Stroke {
            paint = paint.with_cap(LineCap::Round);
        }
        if let Some(dash) = self.dash {
            paint = paint.with_dash(dash);
        }

        let shape = match self.geometry {
            GeometrySpec::Circle { center, radius } => {
                Shape::circle(Point::new(center[0], center[1]), radius)
            }
            GeometrySpec::Polyline { rings } => Shape::polyline(
                rings
                    .into_iter()
                    .map(|ring| ring.into_iter().map(|[x, y]| Point::new(x, y)).collect())
                    .collect(),
            ),
        };

        Ok((
            self.layer,
            self.level,
            ShapePaint::with_offset(shape, paint, self.dy),
        ))
    }
}

fn parse_color(text: &str) -> Result<Color> {
    Color::parse_hex(text).with_context(|| format!("invalid color {text:?}"))
}

#[cfg(test)]
mod tests {
    use super::Scene;

    const SCENE: &str = r##"{
        "tile": { "x": 1, "y": 2, "zoom": 4, "size": 256 },
        "background": "#f4f0e8",
        "levels": 2,
        "ways": [
            {
                "layer": 0, "level": 0, "kind": "polyline",
                "rings": [[[0, 0], [100, 100]]],
                "color": "#333333", "width": 4.0
            },
            {
                "layer": 1, "level": 1, "kind": "circle",
                "center": [128, 128], "radius": 10,
                "color": "#2060c0", "fill": true
            }
        ],
        "symbols": [
            { "x": 64, "y": 64, "priority": 3, "color": "#cc0000", "size": 8 }
        ]
    }"##;

    #[test]
    fn parses_and_lowers_a_full_scene() {
        let draw = Scene::from_json(SCENE).unwrap().into_tile_draw().unwrap();
        assert_eq!(draw.tile.tile_size, 256);
        assert_eq!(draw.ways.layer_count(), 2);
        assert_eq!(draw.ways.level_count(), 2);
        assert_eq!(draw.elements.len(), 1);
        assert!(!draw.background.is_transparent());
    }

    #[test]
    fn tile_size_override_keeps_symbol_anchors_tile_local() {
        let scene_text = r##"{
            "tile": { "x": 2, "y": 1, "zoom": 3, "size": 256 },
            "levels": 1,
            "symbols": [
                { "x": 10, "y": 20, "priority": 1, "color": "#cc0000", "size": 4 }
            ]
        }"##;
        let mut scene = Scene::from_json(scene_text).unwrap();
        scene.set_tile_size(128);
        let draw = scene.into_tile_draw().unwrap();

        // Anchors must be absolute pixels relative to the *overridden*
        // origin, so subtracting it at draw time lands back on (10, 20).
        let origin = draw.tile.origin();
        assert!((origin.x - 256.0).abs() < f64::EPSILON);
        assert!((origin.y - 128.0).abs() < f64::EPSILON);
        let anchor = draw.elements.iter().next().unwrap().anchor();
        assert!((anchor.x - origin.x - 10.0).abs() < 1e-9);
        assert!((anchor.y - origin.y - 20.0).abs() < 1e-9);
    }

    #[test]
    fn rejects_out_of_range_levels() {
        let scene = r##"{
            "tile": { "x": 0, "y": 0, "zoom": 0, "size": 256 },
            "levels": 1,
            "ways": [
                {
                    "layer": 0, "level": 3, "kind": "circle",
                    "center": [0, 0], "radius": 1, "color": "#000000"
                }
            ]
        }"##;
        let error = Scene::from_json(scene)
            .unwrap()
            .into_tile_draw()
            .unwrap_err();
        assert!(error.to_string().contains("level 3 out of range"));
    }

    #[test]
    fn rejects_bad_colors() {
        let scene = r#"{
            "tile": { "x": 0, "y": 0, "zoom": 0, "size": 256 },
            "background": "mauve",
            "levels": 1
        }"#;
        let error = Scene::from_json(scene)
            .unwrap()
            .into_tile_draw()
            .unwrap_err();
        assert!(error.to_string().contains("invalid color"));
    }
}
