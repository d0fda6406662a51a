// Map description loader
//
// Format (whitespace separated tokens; the label tokens are ignored):
//
// ```text
// tileset overworld.png
// width 3
// height 2
// 0 1 3
// 3 3 0
// ```

use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::engine::assets::{AssetType, ResourcePathResolver};

/// Malformed or missing map source
#[derive(Debug, thiserror::Error)]
pub enum MapFormatError {
    #[error("failed to read map {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("map is missing its {0}")]
    MissingField(&'static str),

    #[error("map {field} must be a positive integer, got {value:?}")]
    InvalidDimension { field: &'static str, value: String },

    #[error("tile code #{index} is not a non-negative integer: {token:?}")]
    InvalidTileCode { index: usize, token: String },

    #[error("map declares {expected} tiles but only {found} are present")]
    TooFewTiles { expected: usize, found: usize },
}

/// Parsed map: tileset name, dimensions, and row-major tile codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapData {
    pub tileset: String,
    pub columns: usize,
    pub rows: usize,
    /// `columns * rows` codes, row-major
    pub codes: Vec<u32>,
}

impl MapData {
    /// Code at a tile, if inside the map
    pub fn code_at(&self, col: usize, row: usize) -> Option<u32> {
        if col < self.columns && row < self.rows {
            self.codes.get(row * self.columns + col).copied()
        } else {
            None
        }
    }
}

/// Parse a map from its text
pub fn parse(text: &str) -> Result<MapData, MapFormatError> {
    let mut tokens = text.split_whitespace();

    let tileset = labelled_value(&mut tokens, "tileset")?.to_string();
    let columns = parse_dimension(labelled_value(&mut tokens, "width")?, "width")?;
    let rows = parse_dimension(labelled_value(&mut tokens, "height")?, "height")?;

    let expected = columns
        .checked_mul(rows)
        .ok_or_else(|| MapFormatError::InvalidDimension {
            field: "size",
            value: format!("{}x{}", columns, rows),
        })?;

    let mut codes = Vec::with_capacity(expected);
    for (index, token) in tokens.by_ref().take(expected).enumerate() {
        let code = token
            .parse::<u32>()
            .map_err(|_| MapFormatError::InvalidTileCode {
                index,
                token: token.to_string(),
            })?;
        codes.push(code);
    }

    if codes.len() < expected {
        return Err(MapFormatError::TooFewTiles {
            expected,
            found: codes.len(),
        });
    }

    let trailing = tokens.count();
    if trailing > 0 {
        warn!("Ignoring {} tokens after the last tile code", trailing);
    }

    Ok(MapData {
        tileset,
        columns,
        rows,
        codes,
    })
}

/// Load and parse a map file
pub fn load(path: &Path) -> Result<MapData, MapFormatError> {
    let text = fs::read_to_string(path).map_err(|source| MapFormatError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let map = parse(&text)?;
    info!(
        "Loaded map {} ({}x{} tiles, tileset {})",
        path.display(),
        map.columns,
        map.rows,
        map.tileset
    );
    Ok(map)
}

/// Resolve `name` as a map resource and load it
pub fn load_named(
    resolver: &dyn ResourcePathResolver,
    name: &str,
) -> Result<MapData, MapFormatError> {
    load(&resolver.resolve(AssetType::Map, name))
}

/// Skip a label token and return the value after it
fn labelled_value<'a, I>(tokens: &mut I, field: &'static str) -> Result<&'a str, MapFormatError>
where
    I: Iterator<Item = &'a str>,
{
    tokens
        .next()
        .and_then(|_label| tokens.next())
        .ok_or(MapFormatError::MissingField(field))
}

fn parse_dimension(value: &str, field: &'static str) -> Result<usize, MapFormatError> {
    match value.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(MapFormatError::InvalidDimension {
            field,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::AssetLoader;

    const SMALL_MAP: &str = "tileset overworld.png\nwidth 3\nheight 2\n0 1 3\n3 3 0\n";

    #[test]
    fn test_parse_small_map() {
        let map = parse(SMALL_MAP).unwrap();
        assert_eq!(map.tileset, "overworld.png");
        assert_eq!((map.columns, map.rows), (3, 2));
        assert_eq!(map.codes, vec![0, 1, 3, 3, 3, 0]);
        assert_eq!(map.code_at(1, 0), Some(1));
        assert_eq!(map.code_at(0, 1), Some(3));
        assert_eq!(map.code_at(3, 0), None);
    }

    #[test]
    fn test_codes_may_span_lines_freely() {
        let map = parse("t a.png w 2 h 2 5\n\n 6 7    8").unwrap();
        assert_eq!(map.codes, vec![5, 6, 7, 8]);
    }

    #[test]
    fn test_zero_width_rejected() {
        let err = parse("tileset a.png width 0 height 2 1 2").unwrap_err();
        assert!(matches!(
            err,
            MapFormatError::InvalidDimension { field: "width", .. }
        ));
    }

    #[test]
    fn test_non_numeric_height_rejected() {
        let err = parse("tileset a.png width 2 height tall 1 2").unwrap_err();
        assert!(matches!(
            err,
            MapFormatError::InvalidDimension { field: "height", .. }
        ));
    }

    #[test]
    fn test_too_few_tiles() {
        let err = parse("tileset a.png width 3 height 2 0 0 0 0 0").unwrap_err();
        match err {
            MapFormatError::TooFewTiles { expected, found } => {
                assert_eq!(expected, 6);
                assert_eq!(found, 5);
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_bad_tile_code() {
        let err = parse("tileset a.png width 2 height 1 0 -1").unwrap_err();
        assert!(matches!(
            err,
            MapFormatError::InvalidTileCode { index: 1, .. }
        ));
    }

    #[test]
    fn test_missing_header() {
        assert!(matches!(
            parse(""),
            Err(MapFormatError::MissingField("tileset"))
        ));
        assert!(matches!(
            parse("tileset a.png width"),
            Err(MapFormatError::MissingField("width"))
        ));
    }

    #[test]
    fn test_trailing_tokens_ignored() {
        let map = parse("tileset a.png width 1 height 1 4 9 9").unwrap();
        assert_eq!(map.codes, vec![4]);
    }

    #[test]
    fn test_missing_file() {
        let err = load(Path::new("/no/such/dir/map-01.txt")).unwrap_err();
        assert!(matches!(err, MapFormatError::Io { .. }));
        assert!(err.to_string().contains("map-01.txt"));
    }

    #[test]
    fn test_load_named_resolves_maps_directory() {
        let loader = AssetLoader::new("/no/such/res");
        match load_named(&loader, "map-01.txt") {
            Err(MapFormatError::Io { path, .. }) => {
                assert_eq!(path, PathBuf::from("/no/such/res/Maps/map-01.txt"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_load_from_disk() {
        let path = std::env::temp_dir().join(format!("tile-world-map-{}.txt", std::process::id()));
        fs::write(&path, SMALL_MAP).unwrap();

        let map = load(&path);
        let _ = fs::remove_file(&path);

        assert_eq!(map.unwrap().codes.len(), 6);
    }
}
