//! Permutations of `n` letters, composed as functions.
//!
//! A value is an array of 1-based images: `images[i]` is where letter
//! `i + 1` goes. Composition follows the function-application convention
//! `(a * b)[i] = a[b[i]]`, i.e. `b` acts first. The same convention makes
//! a product of parsed cycle strings read right-to-left, so concatenating
//! two cycle strings and parsing the result equals composing the parses.
//!
//! The disjoint-cycle codec lives here as well: `parse_cycles` turns
//! `"(1 2 5) (3 4)"` into an image array and `cycle_string` walks an image
//! array back into disjoint cycles, omitting fixed points.

use core::fmt;

use crate::algebra::group::GroupError;
use crate::algebra::value::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Permutation {
    pub(crate) letters: usize,
}

impl Permutation {
    pub(crate) fn new(letters: usize) -> Result<Self, GroupError> {
        if letters < 1 {
            return Err(GroupError::InvalidParameter {
                reason: "a permutation group needs at least 1 letter".to_string(),
            });
        }
        Ok(Self { letters })
    }

    pub(crate) fn identity(&self) -> Value {
        Value::Perm(self.identity_images())
    }

    pub(crate) fn identity_images(&self) -> Vec<u32> {
        (1..=self.letters as u32).collect()
    }

    /// Check that `images` is a bijection on `{1..letters}`.
    pub(crate) fn canonical(&self, images: &[u32]) -> Result<Vec<u32>, String> {
        if images.len() != self.letters {
            return Err(format!(
                "expected {} images, got {}",
                self.letters,
                images.len()
            ));
        }
        let mut seen = vec![false; self.letters];
        for &image in images {
            if image == 0 || image as usize > self.letters {
                return Err(format!(
                    "image {} is outside the letter range 1..={}",
                    image, self.letters
                ));
            }
            if seen[image as usize - 1] {
                return Err(format!("image {} appears more than once", image));
            }
            seen[image as usize - 1] = true;
        }
        Ok(images.to_vec())
    }

    /// `(a * b)[i] = a[b[i]]`: apply `b` first, then `a`.
    pub(crate) fn combine(&self, a: &[u32], b: &[u32]) -> Vec<u32> {
        b.iter().map(|&image| a[image as usize - 1]).collect()
    }

    /// Functional inverse: `inv[a[i]] = i`.
    pub(crate) fn invert(&self, a: &[u32]) -> Vec<u32> {
        let mut inverse = vec![0u32; a.len()];
        for (index, &image) in a.iter().enumerate() {
            inverse[image as usize - 1] = index as u32 + 1;
        }
        inverse
    }

    /// Parse a disjoint-cycle string such as `"(1 2 5) (3 4)"` into an
    /// image array. Whitespace inside and between cycles is tolerated,
    /// 1-cycles are accepted and ignored, and the empty string parses to
    /// the identity. The parsed cycles compose left to right.
    pub(crate) fn parse_cycles(&self, input: &str) -> Result<Vec<u32>, String> {
        let mut result = self.identity_images();
        let mut rest = input.trim_start();
        while !rest.is_empty() {
            let Some(open) = rest.strip_prefix('(') else {
                return Err(format!("expected '(' at {:?}", rest));
            };
            let Some(close) = open.find(')') else {
                return Err("missing closing ')'".to_string());
            };
            let mut cycle = Vec::new();
            for token in open[..close].split_whitespace() {
                let letter: u32 = token
                    .parse()
                    .map_err(|_| format!("{:?} is not a letter", token))?;
                if letter == 0 || letter as usize > self.letters {
                    return Err(format!(
                        "letter {} is outside the letter range 1..={}",
                        letter, self.letters
                    ));
                }
                cycle.push(letter);
            }
            result = self.combine(&result, &self.cycle_images(&cycle));
            rest = open[close + 1..].trim_start();
        }
        Ok(result)
    }

    /// The permutation `c1 -> c2 -> ... -> ck -> c1`, identity elsewhere.
    fn cycle_images(&self, cycle: &[u32]) -> Vec<u32> {
        let mut images = self.identity_images();
        for pair in cycle.windows(2) {
            images[pair[0] as usize - 1] = pair[1];
        }
        if let (Some(&last), Some(&first)) = (cycle.last(), cycle.first()) {
            images[last as usize - 1] = first;
        }
        images
    }

    /// All `letters!` permutations in lexicographic order.
    pub(crate) fn enumerate(&self) -> Vec<Value> {
        let mut current = self.identity_images();
        let mut all = vec![Value::Perm(current.clone())];
        while next_permutation(&mut current) {
            all.push(Value::Perm(current.clone()));
        }
        all
    }
}

impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "permutations of {} letters", self.letters)
    }
}

/// Serialize an image array into disjoint-cycle notation.
///
/// Cycles start from the smallest unvisited letter, fixed points are
/// omitted, and cycles are joined with a single space. The identity
/// serializes to the empty string.
pub(crate) fn cycle_string(images: &[u32]) -> String {
    let mut visited = vec![false; images.len()];
    let mut cycles: Vec<String> = Vec::new();
    for start in 1..=images.len() as u32 {
        if visited[start as usize - 1] {
            continue;
        }
        let mut cycle = vec![start];
        visited[start as usize - 1] = true;
        let mut letter = images[start as usize - 1];
        while letter != start {
            visited[letter as usize - 1] = true;
            cycle.push(letter);
            letter = images[letter as usize - 1];
        }
        if cycle.len() > 1 {
            let letters: Vec<String> = cycle.iter().map(|l| l.to_string()).collect();
            cycles.push(format!("({})", letters.join(" ")));
        }
    }
    cycles.join(" ")
}

/// Advance `items` to the next lexicographic permutation, returning
/// `false` once the sequence is fully descending.
fn next_permutation(items: &mut [u32]) -> bool {
    if items.len() < 2 {
        return false;
    }
    let mut i = items.len() - 1;
    while i > 0 && items[i - 1] >= items[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }
    let mut j = items.len() - 1;
    while items[j] <= items[i - 1] {
        j -= 1;
    }
    items.swap(i - 1, j);
    items[i..].reverse();
    true
}

#[cfg(test)]
mod tests {
    use crate::{Group, GroupError};

    fn group5() -> Group {
        Group::permutation(5).unwrap()
    }

    #[test]
    fn letters_below_one_is_rejected() {
        assert!(matches!(
            Group::permutation(0),
            Err(GroupError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn identity_is_the_trivial_arrangement() {
        let group = group5();
        assert_eq!(
            group.identity().value().as_perm(),
            Some(&[1u32, 2, 3, 4, 5][..])
        );
    }

    #[test]
    fn elem_rejects_wrong_length() {
        let group = group5();
        assert!(matches!(
            group.elem(vec![1u32, 2, 3]),
            Err(GroupError::InvalidValue { .. })
        ));
    }

    #[test]
    fn elem_rejects_repeats() {
        let group = group5();
        assert!(matches!(
            group.elem(vec![1u32, 2, 2, 3, 5]),
            Err(GroupError::InvalidValue { .. })
        ));
    }

    #[test]
    fn elem_rejects_out_of_range_images() {
        let group = group5();
        for bad in [vec![1u32, 2, 3, 6, 5], vec![0u32, 2, 3, 4, 5]] {
            assert!(matches!(
                group.elem(bad),
                Err(GroupError::InvalidValue { .. })
            ));
        }
    }

    #[test]
    fn elem_rejects_wrong_representation_kind() {
        let group = group5();
        assert!(matches!(
            group.elem(3),
            Err(GroupError::InvalidValue { .. })
        ));
    }

    #[test]
    fn composition_applies_right_operand_first() {
        let group = group5();
        let composed = group
            .op(vec![5u32, 4, 3, 2, 1], vec![2u32, 4, 1, 3, 5])
            .unwrap();
        assert_eq!(composed, group.elem(vec![4u32, 2, 5, 3, 1]).unwrap());
    }

    #[test]
    fn composition_of_three() {
        let group = group5();
        let composed = group
            .compose([
                vec![5u32, 4, 3, 2, 1],
                vec![2u32, 4, 1, 3, 5],
                vec![2u32, 3, 5, 1, 4],
            ])
            .unwrap();
        assert_eq!(composed, group.elem(vec![2u32, 5, 1, 4, 3]).unwrap());
    }

    #[test]
    fn inverse_relation_holds_for_all_permutations() {
        let group = Group::permutation(4).unwrap();
        for element in group.elements().unwrap() {
            assert_eq!(
                element.compose(&element.inverse()).unwrap(),
                group.identity()
            );
            assert_eq!(
                element.inverse().compose(&element).unwrap(),
                group.identity()
            );
        }
    }

    #[test]
    fn exp_with_group_exponent_gives_identity() {
        let group = group5();
        // lcm(1..=5) = 60 is a multiple of every element order
        let element = group.elem(vec![3u32, 1, 4, 5, 2]).unwrap();
        assert_eq!(element.pow(60), group.identity());
    }

    #[test]
    fn exp_of_transposition() {
        let group = group5();
        let swap = group.elem(vec![1u32, 4, 3, 2, 5]).unwrap();
        assert_eq!(swap.pow(4), group.identity());
        assert_eq!(swap.pow(3), swap.inverse());
    }

    #[test]
    fn parse_cycles_basic() {
        let group = group5();
        assert_eq!(
            group.parse_cycles("(1 2 5) (3 4)").unwrap(),
            group.elem(vec![2u32, 5, 4, 3, 1]).unwrap()
        );
        assert_eq!(
            group.parse_cycles("(1 2 5) (3 4)").unwrap(),
            group.parse_cycles("(3 4) (1 2 5)").unwrap()
        );
    }

    #[test]
    fn parse_cycles_with_fixed_points() {
        let group = group5();
        let expected = group.elem(vec![5u32, 4, 3, 2, 1]).unwrap();
        for input in [
            "(1 5) (2 4)",
            "(2 4) (1 5)",
            "(1 5) (2 4) (3)",
            "(1 5) (3) (2 4)",
            "(3) (1 5) (2 4)",
        ] {
            assert_eq!(group.parse_cycles(input).unwrap(), expected);
        }
    }

    #[test]
    fn parse_cycles_four_cycle() {
        let group = group5();
        assert_eq!(
            group.parse_cycles("(1 4 3 5)").unwrap(),
            group.elem(vec![4u32, 2, 5, 3, 1]).unwrap()
        );
        assert_eq!(
            group.parse_cycles("(1 4 3 5)").unwrap(),
            group.parse_cycles("(2) (1 4 3 5)").unwrap()
        );
    }

    #[test]
    fn parse_cycles_tolerates_extra_spaces() {
        let group = group5();
        assert_eq!(
            group.parse_cycles("( 1 2 ) ( 3 5 )").unwrap(),
            group.parse_cycles("(1 2) (3 5)").unwrap()
        );
    }

    #[test]
    fn parse_cycles_of_empty_string_is_identity() {
        let group = group5();
        assert_eq!(group.parse_cycles("").unwrap(), group.identity());
    }

    #[test]
    fn parse_cycles_rejects_malformed_input() {
        let group = group5();
        for bad in ["(1 2", "1 2)", "(1 x)", "(1 2) 3", "(6)"] {
            assert!(
                matches!(group.parse_cycles(bad), Err(GroupError::InvalidValue { .. })),
                "expected {:?} to be rejected",
                bad
            );
        }
    }

    #[test]
    fn parse_cycles_rejects_repeated_letters() {
        let group = group5();
        // (1 2 1 3) does not describe a bijection
        assert!(matches!(
            group.parse_cycles("(1 2 1 3)"),
            Err(GroupError::InvalidValue { .. })
        ));
    }

    #[test]
    fn product_of_cycle_strings_matches_concatenation() {
        let group = group5();
        let cycles = ["(1 3 4)(2 5)", "(5 2)", "(5 2 1 3)", "(1 4)(2 3)"];
        let product = group
            .compose(cycles.iter().map(|c| group.parse_cycles(c).unwrap()))
            .unwrap();
        assert_eq!(product, group.parse_cycles("(2 5)").unwrap());
        assert_eq!(product, group.parse_cycles(&cycles.concat()).unwrap());
    }

    #[test]
    fn cycle_round_trip_over_all_elements() {
        let group = group5();
        for element in group.elements().unwrap() {
            let reparsed = group.parse_cycles(&element.to_cycles()).unwrap();
            assert_eq!(reparsed, element, "round trip failed for {}", element);
        }
    }

    #[test]
    fn to_cycles_omits_fixed_points() {
        let group = group5();
        let element = group.elem(vec![2u32, 5, 3, 4, 1]).unwrap();
        assert_eq!(element.to_cycles(), "(1 2 5)");
        assert_eq!(group.identity().to_cycles(), "");
    }

    #[test]
    fn enumeration_is_lexicographic_and_complete() {
        let group = Group::permutation(3).unwrap();
        let elements = group.elements().unwrap();
        assert_eq!(elements.len(), 6);
        assert_eq!(elements[0], group.identity());
        assert_eq!(
            elements[1],
            group.elem(vec![1u32, 3, 2]).unwrap()
        );
        assert_eq!(
            elements[5],
            group.elem(vec![3u32, 2, 1]).unwrap()
        );
    }

    #[test]
    fn single_letter_group_is_trivial() {
        let group = Group::permutation(1).unwrap();
        assert_eq!(group.elements().unwrap().len(), 1);
        assert_eq!(group.identity().to_cycles(), "");
    }
}
