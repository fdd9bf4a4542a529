//! Canned coach responses and the keyword classifier that picks them.
//!
//! The table is scanned top to bottom and the first group with any
//! keyword found in the lower-cased input wins. Matching is plain
//! substring search so "recv" will land in the CV group.
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Interview,
    Skills,
    Roadmap,
    Cv,
    MockInterview,
    General,
}

pub struct ResponseTemplate {
    pub topic: Topic,
    pub keywords: &'static [&'static str],
    pub body: &'static str,
}

impl ResponseTemplate {
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k))
    }
}

const INTERVIEW: &str = "Great! Let's prepare you for that frontend developer interview. Here are some key areas to focus on:\n\n1. **Technical Skills**\n   - React.js fundamentals and hooks\n   - JavaScript ES6+ features\n   - CSS and responsive design\n   - State management (Redux/Context API)\n\n2. **Common Interview Questions**\n   - What's the virtual DOM and how does it work?\n   - Explain React component lifecycle\n   - Difference between controlled and uncontrolled components\n\n3. **Coding Challenges**\n   - Practice building small components\n   - Solve algorithm problems on LeetCode\n\nWould you like me to conduct a mock interview with you?";

const SKILLS: &str = "Based on your profile and current market trends, here are the skills I recommend:\n\n**High Priority:**\n1. TypeScript - Increasingly required for frontend roles\n2. Next.js - Popular React framework\n3. Testing (Jest, React Testing Library)\n\n**Medium Priority:**\n4. Node.js basics for full-stack capabilities\n5. GraphQL for modern APIs\n6. Docker for containerization\n\n**Soft Skills:**\n7. Agile/Scrum methodologies\n8. Communication and teamwork\n\nI can create a detailed learning roadmap for any of these. Which would you like to focus on first?";

const ROADMAP: &str = "I'll create a personalized 6-month career roadmap for you:\n\n**Month 1-2: Foundation Strengthening**\n- Complete Advanced React course\n- Build 2 portfolio projects\n- Contribute to open-source\n\n**Month 3-4: Skill Expansion**\n- Learn TypeScript\n- Master testing frameworks\n- Complete system design basics\n\n**Month 5-6: Job Search & Interview**\n- Polish CV and portfolio\n- Apply to 20+ companies\n- Practice mock interviews weekly\n- Network on LinkedIn\n\n**Goal:** Land a Frontend Developer role at a tech company\n\nWould you like me to break down any of these phases in more detail?";

const CV: &str = "I can help improve your CV! Here are my top recommendations:\n\n1. **Add Quantifiable Achievements**\n   - Instead of: 'Worked on React projects'\n   - Try: 'Built 3 React applications serving 10K+ users'\n\n2. **Optimize Keywords**\n   - Include: React, TypeScript, JavaScript, CSS, Git\n   - Match job description keywords\n\n3. **Structure Improvements**\n   - Professional summary at the top\n   - Projects section with live links\n   - Clear skills categorization\n\nWould you like me to review your current CV and provide specific feedback?";

const MOCK_INTERVIEW: &str = "Let's start a mock interview! I'll ask you some common frontend developer questions:\n\n**Question 1:** Can you explain what React Hooks are and why they were introduced?\n\nTake your time to answer, and I'll provide feedback on your response. You can also say 'skip' to move to the next question or 'end' to finish the interview.";

const GENERAL: &str = "That's a great question! Based on your career goals and current skill level, I recommend focusing on:\n\n1. **Immediate Actions**\n   - Update your CV with recent projects\n   - Complete the React advanced course you started\n   - Build a portfolio website\n\n2. **This Week**\n   - Apply to 5 suitable job openings\n   - Practice coding challenges daily\n   - Connect with 10 people on LinkedIn\n\n3. **This Month**\n   - Attend tech meetups or webinars\n   - Contribute to open-source projects\n   - Prepare for technical interviews\n\nIs there anything specific you'd like to discuss in more detail?";

/// Keyword groups in priority order.
pub static TEMPLATES: &[ResponseTemplate] = &[
    ResponseTemplate {
        topic: Topic::Interview,
        keywords: &["interview"],
        body: INTERVIEW,
    },
    ResponseTemplate {
        topic: Topic::Skills,
        keywords: &["skill", "learn"],
        body: SKILLS,
    },
    ResponseTemplate {
        topic: Topic::Roadmap,
        keywords: &["roadmap", "career"],
        body: ROADMAP,
    },
    ResponseTemplate {
        topic: Topic::Cv,
        keywords: &["cv", "resume"],
        body: CV,
    },
    ResponseTemplate {
        topic: Topic::MockInterview,
        keywords: &["mock"],
        body: MOCK_INTERVIEW,
    },
];

pub static FALLBACK: ResponseTemplate = ResponseTemplate {
    topic: Topic::General,
    keywords: &[],
    body: GENERAL,
};

/// Suggestions offered while a conversation only holds the greeting.
pub static QUICK_PROMPTS: [&str; 5] = [
    "Help me prepare for a frontend developer interview",
    "What skills should I learn for my dream job?",
    "Create a career roadmap for me",
    "How can I improve my CV?",
    "Practice mock interview questions",
];

/// Find the template for a user message. Always returns something
/// because of the fallback.
pub fn select_template(user_text: &str) -> &'static ResponseTemplate {
    let lowered = user_text.to_lowercase();
    TEMPLATES
        .iter()
        .find(|t| t.matches(&lowered))
        .unwrap_or(&FALLBACK)
}

pub fn classify_topic(user_text: &str) -> Topic {
    select_template(user_text).topic
}

pub fn classify(user_text: &str) -> &'static str {
    select_template(user_text).body
}

pub fn greeting(student_name: &str) -> String {
    format!(
        "Hi {}! 👋 I'm your AI Career Coach. I'm here to help you with career guidance, skill recommendations, mock interviews, and creating your personalized career roadmap. How can I assist you today?",
        student_name
    )
}
