//! Day 24: Never Tell Me The Odds

use crate::utils::parse::{ints, parse_lines};
use anyhow::anyhow;
use aoc_harness::{Answer, AocParser, Expected, InputKind, ParseError, SolveError, Solver};
use aoc_harness_macros::AutoRegisterSolver;
use itertools::Itertools;
use std::ops::{Add, Mul, Sub};

#[derive(AutoRegisterSolver)]
#[aoc(day = 24, tags = ["geometry", "math"])]
pub struct Day24;

const SAMPLE_AREA: (i128, i128) = (7, 27);
const REAL_AREA: (i128, i128) = (200_000_000_000_000, 400_000_000_000_000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct V3 {
    x: i128,
    y: i128,
    z: i128,
}

impl V3 {
    fn dot(self, o: V3) -> i128 {
        self.x * o.x + self.y * o.y + self.z * o.z
    }

    fn cross(self, o: V3) -> V3 {
        V3 {
            x: self.y * o.z - self.z * o.y,
            y: self.z * o.x - self.x * o.z,
            z: self.x * o.y - self.y * o.x,
        }
    }

    /// Exact division of every coordinate
    fn div_exact(self, d: i128) -> Option<V3> {
        if d == 0 || self.x % d != 0 || self.y % d != 0 || self.z % d != 0 {
            return None;
        }
        Some(V3 {
            x: self.x / d,
            y: self.y / d,
            z: self.z / d,
        })
    }
}

impl Add for V3 {
    type Output = V3;
    fn add(self, o: V3) -> V3 {
        V3 {
            x: self.x + o.x,
            y: self.y + o.y,
            z: self.z + o.z,
        }
    }
}

impl Sub for V3 {
    type Output = V3;
    fn sub(self, o: V3) -> V3 {
        V3 {
            x: self.x - o.x,
            y: self.y - o.y,
            z: self.z - o.z,
        }
    }
}

impl Mul<i128> for V3 {
    type Output = V3;
    fn mul(self, k: i128) -> V3 {
        V3 {
            x: self.x * k,
            y: self.y * k,
            z: self.z * k,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hailstone {
    pos: V3,
    vel: V3,
}

/// Whether the xy-paths of two hailstones cross inside `[lo, hi]` in both
/// coordinates, at a time that lies in the future for both
fn paths_cross(a: &Hailstone, b: &Hailstone, (lo, hi): (i128, i128)) -> bool {
    let det = a.vel.x * b.vel.y - a.vel.y * b.vel.x;
    if det == 0 {
        return false;
    }
    let (dx, dy) = (b.pos.x - a.pos.x, b.pos.y - a.pos.y);
    let (mut t, mut s) = (dx * b.vel.y - dy * b.vel.x, dx * a.vel.y - dy * a.vel.x);
    let mut det = det;
    if det < 0 {
        (t, s, det) = (-t, -s, -det);
    }
    if t < 0 || s < 0 {
        return false;
    }
    // crossing point scaled by det
    let x = a.pos.x * det + a.vel.x * t;
    let y = a.pos.y * det + a.vel.y * t;
    (lo * det..=hi * det).contains(&x) && (lo * det..=hi * det).contains(&y)
}

/// The rock's starting position, from hailstones `a`, `b`, `c`
///
/// In the rest frame of `a` the rock passes through the origin, so it lies
/// in the plane spanned by the origin and the path of `b`, and likewise for
/// `c`. Where each stone crosses the other stone's plane gives two hit times.
fn rock_from(a: &Hailstone, b: &Hailstone, c: &Hailstone) -> Option<V3> {
    let (pb, vb) = (b.pos - a.pos, b.vel - a.vel);
    let (pc, vc) = (c.pos - a.pos, c.vel - a.vel);

    let nb = pb.cross(vb);
    let nc = pc.cross(vc);
    let (tc_num, tc_den) = (-pc.dot(nb), vc.dot(nb));
    let (tb_num, tb_den) = (-pb.dot(nc), vb.dot(nc));
    if tb_den == 0 || tc_den == 0 || tb_num % tb_den != 0 || tc_num % tc_den != 0 {
        return None;
    }
    let (tb, tc) = (tb_num / tb_den, tc_num / tc_den);
    if tb == tc {
        return None;
    }

    let hit_b = b.pos + b.vel * tb;
    let hit_c = c.pos + c.vel * tc;
    let vel = (hit_c - hit_b).div_exact(tc - tb)?;
    Some(hit_b - vel * tb)
}

fn parse_hailstone(line: &str) -> anyhow::Result<Hailstone> {
    match ints::<i64>(line)?[..] {
        [px, py, pz, vx, vy, vz] => Ok(Hailstone {
            pos: V3 {
                x: px.into(),
                y: py.into(),
                z: pz.into(),
            },
            vel: V3 {
                x: vx.into(),
                y: vy.into(),
                z: vz.into(),
            },
        }),
        _ => Err(anyhow!("expected `px, py, pz @ vx, vy, vz`")),
    }
}

impl AocParser for Day24 {
    type Parsed = Vec<Hailstone>;

    fn parse(input: &str) -> Result<Self::Parsed, ParseError> {
        parse_lines(input.trim(), parse_hailstone)
    }
}

impl Solver for Day24 {
    const PART_1_EXPECTED: Expected = Expected::Int(2);
    const PART_2_EXPECTED: Expected = Expected::Int(47);

    fn part_1(stones: &Self::Parsed, kind: InputKind) -> Result<Answer, SolveError> {
        let area = if kind.is_sample() { SAMPLE_AREA } else { REAL_AREA };
        Ok(stones
            .iter()
            .tuple_combinations()
            .filter(|(a, b)| paths_cross(a, b, area))
            .count()
            .into())
    }

    fn part_2(stones: &Self::Parsed, _: InputKind) -> Result<Answer, SolveError> {
        let (first, rest) = stones
            .split_first()
            .ok_or_else(|| SolveError::Unsolvable("no hailstones".into()))?;
        rest.iter()
            .tuple_combinations()
            .find_map(|(b, c)| rock_from(first, b, c))
            .map(|rock| Answer::Int(rock.x + rock.y + rock.z))
            .ok_or_else(|| {
                SolveError::Unsolvable("no pair of hailstones pins down the rock".into())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::days::solve_sample;
    use aoc_harness::Part;

    #[test]
    fn test_samples() {
        assert_eq!(solve_sample::<Day24>(sample!(24, 1), Part::One), Answer::Int(2));
        assert_eq!(solve_sample::<Day24>(sample!(24, 2), Part::Two), Answer::Int(47));
    }

    #[test]
    fn test_rock_position() {
        let stones = Day24::parse(sample!(24, 1)).unwrap();
        let rock = rock_from(&stones[0], &stones[1], &stones[2]).unwrap();
        assert_eq!(rock, V3 { x: 24, y: 13, z: 10 });
    }

    #[test]
    fn test_parallel_paths_never_cross() {
        let stones = Day24::parse("18, 19, 22 @ -1, -1, -2\n20, 25, 34 @ -2, -2, -4").unwrap();
        assert!(!paths_cross(&stones[0], &stones[1], SAMPLE_AREA));
    }
}
