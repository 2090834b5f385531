//! Assistant content production.
//!
//! The conversation core treats reply synthesis as an opaque collaborator:
//! it hands over a topic and category, waits, and gets content back. The
//! trait is the seam; [`StudyTutor`] is the canned implementation used
//! until a real model backend exists.

use crate::session::Attachment;

/// A synthesized assistant reply.
#[derive(Debug, Clone)]
pub struct TutorReply {
    pub content: String,
    pub attachments: Vec<Attachment>,
}

/// Produces assistant replies from a submitted topic and category context.
///
/// Implementations may be slow; the caller wraps the call in its own delay
/// and must never block other interaction while waiting.
pub trait ReplySynthesizer: Send + Sync {
    fn synthesize(&self, topic: &str, category: &str) -> TutorReply;
}

/// Greeting seeded into a freshly activated session.
pub fn greeting(category: &str) -> String {
    format!("Hello! I'm your {category} AI tutor. How can I help you today?")
}

/// Canned study-guide responder.
///
/// Always succeeds and always returns the same ten-section outline plus two
/// reference images.
#[derive(Debug, Default, Clone, Copy)]
pub struct StudyTutor;

impl ReplySynthesizer for StudyTutor {
    fn synthesize(&self, topic: &str, category: &str) -> TutorReply {
        let content = format!(
            "\
1. Introduction
{topic} is a foundational concept in {category} that sets the stage for deeper understanding.

2. Core Principles
These principles explain how the system behaves under different conditions.

3. Why This Matters
Understanding this topic improves both academic learning and practical problem solving.

4. Key Terminology
Knowing the correct terminology avoids confusion in advanced discussions.

5. Step-by-Step Explanation
Each idea builds logically on the previous one.

6. Common Mistakes
Many learners struggle due to incorrect assumptions at this stage.

7. Real World Applications
This concept appears frequently in exams and industry use cases.

8. Worked Examples
Examples help reinforce understanding and confidence.

9. Advanced Insights
Once basics are clear, deeper patterns become visible.

10. Summary
Mastering {topic} will significantly strengthen your {category} skills."
        );

        TutorReply {
            content,
            attachments: vec![
                Attachment::new("https://images.unsplash.com/photo-1532012197267-da84d127e765"),
                Attachment::new("https://images.unsplash.com/photo-1523240795612-9a054b0db644"),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_names_the_category() {
        let text = greeting("Maths");
        assert!(text.contains("Maths AI tutor"));
    }

    #[test]
    fn reply_weaves_in_topic_and_category() {
        let reply = StudyTutor.synthesize("derivatives", "Maths");
        assert!(reply.content.contains("derivatives is a foundational concept in Maths"));
        assert!(reply.content.contains("10. Summary"));
    }

    #[test]
    fn reply_carries_two_reference_images() {
        let reply = StudyTutor.synthesize("algebra", "Maths");
        assert_eq!(reply.attachments.len(), 2);
        assert!(reply.attachments[0].url.starts_with("https://"));
    }
}
