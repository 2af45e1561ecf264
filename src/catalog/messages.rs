use crate::models::Flag;
use lazy_static::lazy_static;
use std::collections::HashMap;

/// Candidate titles and descriptions for one flag. Entries are templates
/// containing the `{friendName}` placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessagePool {
    pub titles: Vec<&'static str>,
    pub descriptions: Vec<&'static str>,
}

lazy_static! {
    pub static ref RESULT_MESSAGES: HashMap<Flag, MessagePool> = {
        let mut pools = HashMap::new();
        pools.insert(Flag::Green, MessagePool {
            titles: vec![
                "{friendName} is a Green Flag Legend! 🌟",
                "{friendName} - Ultimate Friend Goals! 💚",
                "{friendName} is the Friend Everyone Deserves! ✨",
            ],
            descriptions: vec![
                "{friendName} is the friend who brings snacks to a crisis, handles drama maturely, and would help you move without complaining. They're a keeper!",
                "{friendName} has mastered the art of being supportive, loyal, and just the right amount of fun. You're lucky to have them!",
                "{friendName} is like the golden retriever of friendship - loyal, supportive, and always ready for an adventure. Treasure this friendship!",
            ],
        });
        pools.insert(Flag::Yellow, MessagePool {
            titles: vec![
                "{friendName} is a Yellow Flag - Proceed with Caution! 💛",
                "{friendName} Gives Mixed Signals! 🤔",
                "{friendName} is a Loveable Mess! 😅",
            ],
            descriptions: vec![
                "{friendName} means well but sometimes misses the mark. They'd help you move but complain about their back for weeks. Still loveable though!",
                "{friendName} is great in small doses. They care about you, but sometimes their approach is... unique. They're working on it!",
                "{friendName} isn't quite red flag territory, but they've got some questionable friendship habits. Maybe gently guide them toward better choices!",
            ],
        });
        pools.insert(Flag::Red, MessagePool {
            titles: vec![
                "Yikes... {friendName} is a Red Flag! 🚩",
                "Houston, We Have a Problem with {friendName}! 🚨",
                "{friendName} is the Chaotic Friend! 💥",
            ],
            descriptions: vec![
                "{friendName} is the friend who would steal your fries and then ask why you're being dramatic. You might need to have a serious conversation!",
                "{friendName} gives main character energy in everyone else's story. Maybe it's time they learn what 'supporting role' means?",
                "{friendName} is the friend people complain about in group chats. They're memorable, but not always for the right reasons!",
            ],
        });
        pools
    };
}
