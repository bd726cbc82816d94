use nom::{
    Parser,
    bytes::complete::tag,
    character::complete::digit1,
    combinator::{all_consuming, map_res},
    sequence::preceded,
};

/// A grid-lattice node name's decoded coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCoord {
    pub net_id: u64,
    pub x: i64,
    pub y: i64,
}

/// Matches `name` against `n(\d+)_(\d+)_(\d+)$`, anchored to the end of the
/// string but not the start -- a leading prefix before the `n` is tolerated,
/// mirroring a search (not a full match) against the pattern.
///
/// Tries every `n`-led suffix of `name` left to right and returns the first
/// one that parses cleanly to the end of the string.
pub fn match_grid_node(name: &str) -> Option<GridCoord> {
    fn triple(input: &str) -> nom::IResult<&str, (u64, i64, i64)> {
        let (input, net_id) = preceded(tag("n"), map_res(digit1, str::parse::<u64>)).parse(input)?;
        let (input, x) = preceded(tag("_"), map_res(digit1, str::parse::<i64>)).parse(input)?;
        let (input, y) = preceded(tag("_"), map_res(digit1, str::parse::<i64>)).parse(input)?;
        Ok((input, (net_id, x, y)))
    }

    for (byte_idx, c) in name.char_indices() {
        if c != 'n' {
            continue;
        }
        if let Ok((_, (net_id, x, y))) = all_consuming(triple).parse(&name[byte_idx..]) {
            return Some(GridCoord { net_id, x, y });
        }
    }
    None
}
