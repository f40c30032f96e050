mod blocks;
mod escaping;
mod fixtures;
mod lists;
