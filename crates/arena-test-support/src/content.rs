//! A small, fixed content pack for setup tests.

use arena_content::ContentPack;

const TEST_PACK: &str = r"
words:
  colors: [red, orange, yellow, green, blue, indigo, violet, black, white,
           grey, pink, brown, gold, silver, teal, navy, olive, maroon, lime,
           cyan, magenta, beige, coral, ivory, amber, plum]
  tiny: [one, two, three]
  two-word: [salt, pepper, oil, vinegar, basil, thyme, sage, mint, dill, clove]

charades:
  chores:
    easy: [sweep, mop, dust, wash, iron, cook, rake, vacuum]
    medium: [fold laundry, wash dishes, mow lawn, make bed]

truth_or_dare:
  mild:
    truths: [t1, t2, t3, t4]
    dares: [d1, d2, d3]

never_have_i_ever:
  classic: [n1, n2, n3, n4, n5, n6]

picture_quiz:
  shapes:
    - { image: /img/circle.png, answer: Circle }
    - { image: /img/square.png, answer: Square }
    - { image: /img/triangle.png, answer: Triangle }
    - { image: /img/star.png, answer: Star }
    - { image: /img/heart.png, answer: Heart }
  pair:
    - { image: /img/sun.png, answer: Sun }
    - { image: /img/moon.png, answer: Moon }
";

/// Builds the shared test pack.
///
/// # Panics
///
/// Panics if the embedded YAML is invalid, which is a bug in this crate.
#[must_use]
pub fn test_content_pack() -> ContentPack {
    ContentPack::from_yaml_str(TEST_PACK).expect("test content pack is valid")
}
