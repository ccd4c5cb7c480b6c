use image::{Rgb, RgbImage};

/// Background color treated as "nothing drawn here".
pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// True when everything visible on `current` reappears unchanged on `next`.
///
/// Every pixel of `current` must either match `next` exactly or be pure
/// white. The test is asymmetric: `next` may add content on top of white
/// areas, but anything visible on `current` that is missing from `next`
/// breaks the match. Grids with different dimensions never match.
pub fn is_redundant(current: &RgbImage, next: &RgbImage) -> bool {
    if current.dimensions() != next.dimensions() {
        return false;
    }

    current
        .pixels()
        .zip(next.pixels())
        .all(|(p1, p2)| p1 == p2 || *p1 == WHITE)
}
