//! The built-in session catalog.
//!
//! Static data shown in the explorer sidebar. Folders nest to arbitrary
//! depth; leaves are addressable chat sessions.

use super::node::{NodeId, TreeNode};

/// Root folder that is open by default.
pub const DEFAULT_EXPANDED: &str = "recent";

/// Build the default catalog forest.
pub fn default_catalog() -> Vec<TreeNode> {
    vec![
        TreeNode::folder(
            "recent",
            "Recent History",
            vec![
                TreeNode::folder(
                    "recent-math",
                    "Mathematics",
                    vec![
                        TreeNode::folder(
                            "recent-math-calculus",
                            "Calculus",
                            vec![
                                TreeNode::leaf("recent-math-calculus-basics", "Calculus Basics"),
                                TreeNode::leaf(
                                    "recent-math-calculus-derivatives",
                                    "Derivatives Practice",
                                ),
                            ],
                        ),
                        TreeNode::folder(
                            "recent-math-algebra",
                            "Algebra",
                            vec![
                                TreeNode::leaf("recent-math-algebra-linear", "Linear Equations"),
                                TreeNode::leaf(
                                    "recent-math-algebra-quadratic",
                                    "Quadratic Problems",
                                ),
                            ],
                        ),
                    ],
                ),
                TreeNode::folder(
                    "recent-physics",
                    "Physics",
                    vec![TreeNode::folder(
                        "recent-physics-mechanics",
                        "Mechanics",
                        vec![
                            TreeNode::leaf("recent-physics-mechanics-laws", "Newton's Laws"),
                            TreeNode::leaf("recent-physics-mechanics-motion", "Motion Problems"),
                        ],
                    )],
                ),
                TreeNode::leaf("recent-ps4", "Problem Set 4"),
            ],
        ),
        TreeNode::folder(
            "archive",
            "Archived Sessions",
            vec![
                TreeNode::folder(
                    "archive-2025",
                    "Year 2025",
                    vec![TreeNode::folder(
                        "archive-2025-finals",
                        "Final Exams",
                        vec![
                            TreeNode::leaf("archive-2025-finals-math", "Math Final Paper"),
                            TreeNode::leaf("archive-2025-finals-chem", "Chemistry Final Paper"),
                        ],
                    )],
                ),
                TreeNode::folder(
                    "archive-2024",
                    "Year 2024",
                    vec![TreeNode::folder(
                        "archive-2024-labs",
                        "Lab Work",
                        vec![
                            TreeNode::leaf("archive-2024-labs-chem", "Chemistry Lab"),
                            TreeNode::leaf("archive-2024-labs-phy", "Physics Lab"),
                        ],
                    )],
                ),
            ],
        ),
        TreeNode::folder(
            "templates",
            "Templates",
            vec![
                TreeNode::folder(
                    "templates-exam",
                    "Exam Templates",
                    vec![
                        TreeNode::leaf("templates-exam-mid", "Midterm Template"),
                        TreeNode::leaf("templates-exam-final", "Final Exam Template"),
                    ],
                ),
                TreeNode::folder(
                    "templates-notes",
                    "Notes Templates",
                    vec![TreeNode::leaf("templates-notes-daily", "Daily Study Notes")],
                ),
            ],
        ),
    ]
}

/// Default expansion set: the recent-history grouping starts open so the
/// initial view is not fully collapsed.
pub fn default_expanded() -> Vec<NodeId> {
    vec![NodeId::new(DEFAULT_EXPANDED)]
}
