//! Home page composition.

use crate::model::Post;

const HERO_LEN: usize = 4;
const FIRST_BLOCK_END: usize = 10;

/// The latest posts split into the home page's sections.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HomeLayout<'a> {
    pub hero: &'a [Post],
    pub first_block: &'a [Post],
    pub second_block: &'a [Post],
}

impl<'a> HomeLayout<'a> {
    /// Hero gets posts 0..4, the first block 4..10, the second the rest.
    /// Short lists leave the later sections empty.
    pub fn compose(posts: &'a [Post]) -> Self {
        let hero_end = HERO_LEN.min(posts.len());
        let block_end = FIRST_BLOCK_END.min(posts.len());
        Self {
            hero: &posts[..hero_end],
            first_block: &posts[hero_end..block_end],
            second_block: &posts[block_end..],
        }
    }
}
