// Gallows drawings, one per miss count

const STAGES: [&str; 10] = [
    concat!(
        "        \n",
        "        \n",
        "        \n",
        "        \n",
        "        \n",
        "        \n",
        "        \n",
        " ------ \n",
    ),
    concat!(
        "        \n",
        " |      \n",
        " |      \n",
        " |      \n",
        " |      \n",
        " |      \n",
        " |      \n",
        " ------ \n",
    ),
    concat!(
        "------  \n",
        " |      \n",
        " |      \n",
        " |      \n",
        " |      \n",
        " |      \n",
        " |      \n",
        " ------ \n",
    ),
    concat!(
        "------  \n",
        " |    | \n",
        " |      \n",
        " |      \n",
        " |      \n",
        " |      \n",
        " |      \n",
        " ------ \n",
    ),
    concat!(
        "------  \n",
        " |    | \n",
        " |    O \n",
        " |      \n",
        " |      \n",
        " |      \n",
        " |      \n",
        " ------ \n",
    ),
    concat!(
        "------  \n",
        " |    | \n",
        " |    O \n",
        " |    | \n",
        " |      \n",
        " |      \n",
        " |      \n",
        " ------ \n",
    ),
    concat!(
        "------  \n",
        " |    | \n",
        " |    O \n",
        " |   /| \n",
        " |      \n",
        " |      \n",
        " |      \n",
        " ------ \n",
    ),
    concat!(
        "------  \n",
        " |    | \n",
        " |    O \n",
        " |   /|\\\n",
        " |      \n",
        " |      \n",
        " |      \n",
        " ------ \n",
    ),
    concat!(
        "------  \n",
        " |    | \n",
        " |    O \n",
        " |   /|\\\n",
        " |   /  \n",
        " |      \n",
        " |      \n",
        " ------ \n",
    ),
    concat!(
        "------  \n",
        " |    | \n",
        " |    O \n",
        " |   /|\\\n",
        " |   / \\\n",
        " |      \n",
        " |      \n",
        " ------ \n",
    ),
];

pub const GALLOWS_HEIGHT: usize = 8;

/// Drawing for the given number of misses. Counts past the last stage show the full figure.
#[must_use]
pub fn gallows(misses: usize) -> &'static str {
    STAGES[misses.min(STAGES.len() - 1)]
}
