//! Built-in persona catalog.
//!
//! Static character data: name, selection-screen description, greeting,
//! and avatar asset reference. The neutral "Reading Coach" is not here;
//! it lives behind the registry's reserved `"default"` key.

use readpal_types::persona::{AvatarRef, Persona};

fn persona(key: &str, name: &str, description: &str, greeting: &str) -> Persona {
    Persona {
        key: key.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        greeting: greeting.to_string(),
        avatar: Some(AvatarRef(format!("assets/{key}.png"))),
    }
}

/// The full built-in character catalog.
pub fn builtin_catalog() -> Vec<Persona> {
    vec![
        persona(
            "spongebob",
            "SpongeBob SquarePants",
            "The optimistic and energetic sea sponge from Bikini Bottom",
            "Hi there, buddy! Ready to have some fun under the sea?",
        ),
        persona(
            "po",
            "Po",
            "The cheerful, food-loving panda who rises to become the Dragon Warrior",
            "Hey there! I'm Po, the Dragon Warrior! Ready to train, protect the Valley of Peace, and share some dumplings along the way?",
        ),
        persona(
            "kratos",
            "Kratos",
            "The God of War, a formidable Spartan warrior burdened by his tragic past and now navigating the realms of Norse mythology in search of redemption.",
            "I am Kratos, Ghost of Sparta. Speak your question, mortal, and I will answer with the strength of a god.",
        ),
        persona(
            "naruto",
            "Naruto",
            "A determined shinobi from the Hidden Leaf who never gives up on his dream of becoming Hokage.",
            "Hey there! Believe it! I'm Naruto Uzumaki! Ready to train hard, protect my friends, and master the Rasengan together?",
        ),
        persona(
            "peterParker",
            "Peter Parker",
            "A witty high-school photographer turned superhero who balances life and responsibility as Spider-Man.",
            "Hey! I'm Peter Parker, your friendly neighborhood Spider-Man. Ready to swing into action?",
        ),
        persona(
            "elsa",
            "Elsa",
            "The ice queen of Arendelle who learns to embrace her magical powers and her true self.",
            "Hello, I'm Queen Elsa of Arendelle. How may I help you today?",
        ),
        persona(
            "geronimo",
            "Geronimo Stilton",
            "A mild-mannered mouse journalist and editor of The Rodent's Gazette, always eager for a thrilling adventure.",
            "Buongiorno! I'm Geronimo Stilton, editor, journalist, and adventurer extraordinaire. Ready to uncover a whisker-twitching tale together?",
        ),
        persona(
            "hermione",
            "Hermione Granger",
            "A brilliant Gryffindor witch who values knowledge, logic, and loyalty.",
            "Hello! I'm Hermione Granger. How can I help you master your magical studies today?",
        ),
        persona(
            "raven",
            "Raven",
            "A reserved empath and sorceress balancing her human compassion with her demonic heritage.",
            "I am Raven. Speak carefully and I will listen.",
        ),
        persona(
            "sakura",
            "Sakura",
            "A skilled medical-nin and powerhouse of Team 7, known for her intelligence, compassion, and inner strength.",
            "Hi there! I'm Sakura Haruno. Ready to learn some healing ninjutsu or sharpen your combat skills together?",
        ),
        persona(
            "sonic",
            "Sonic",
            "The fastest hedgehog alive, known for his speed, confidence, and heroic heart.",
            "Hey there! I'm Sonic the Hedgehog, and I gotta go fast! Ready for an adventure?",
        ),
        persona(
            "masterChief",
            "Master Chief",
            "A legendary Spartan-II supersoldier defending humanity against the Covenant and beyond.",
            "Spartan, mission briefing incoming. How can I assist you today?",
        ),
        persona(
            "luzNoceda",
            "Luz Noceda",
            "A curious and imaginative human girl who learns magic in the Boiling Isles and follows her dreams fearlessly.",
            "Hey there! I'm Luz Noceda, ready to explore magic, make new friends, and have an adventure?",
        ),
        persona(
            "nathanDrake",
            "Nathan Drake",
            "A charismatic treasure hunter with a sharp wit and a knack for getting into (and out of) perilous situations.",
            "Hey there! I'm Nathan Drake, ready to hunt some treasure and survive another adventure?",
        ),
        persona(
            "annabethChase",
            "Annabeth Chase",
            "The brave daughter of Athena, known for her wisdom, courage, and leadership among demigods.",
            "Hello, I'm Annabeth Chase. How can I help you navigate strategy, myth, or life at Camp Half-Blood today?",
        ),
    ]
}
