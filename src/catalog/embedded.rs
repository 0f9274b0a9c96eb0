//! Embedded movie tables
//!
//! The catalog compiled into the binary, one table per industry. Order
//! matches `Industry::ALL`.

pub(super) struct EmbeddedMovie {
    pub title: &'static str,
    pub emojis: &'static str,
    pub hints: [&'static str; 3],
}

pub(super) const TABLES: [&[EmbeddedMovie]; 4] = [HOLLYWOOD, BOLLYWOOD, TOLLYWOOD, KOLLYWOOD];

const HOLLYWOOD: &[EmbeddedMovie] = &[
    EmbeddedMovie {
        title: "Jurassic Park",
        emojis: "🦖🌴🌋",
        hints: ["Dinosaur adventure", "Based on a novel", "Theme park gone wrong"],
    },
    EmbeddedMovie {
        title: "Frozen",
        emojis: "❄️👸🏰",
        hints: ["Disney animated", "Ice powers", "Let it go"],
    },
    EmbeddedMovie {
        title: "The Lion King",
        emojis: "🦁👑🌅",
        hints: ["Disney classic", "African savanna", "Circle of life"],
    },
    EmbeddedMovie {
        title: "Toy Story",
        emojis: "🤠🚀🧸",
        hints: ["Pixar animation", "Toys come alive", "Woody and Buzz"],
    },
];

const BOLLYWOOD: &[EmbeddedMovie] = &[
    EmbeddedMovie {
        title: "Dangal",
        emojis: "🤼‍♀️👨‍👧‍👧🏅",
        hints: ["Wrestling drama", "Father-daughter story", "Aamir Khan"],
    },
    EmbeddedMovie {
        title: "3 Idiots",
        emojis: "🎓👨‍🎓🤝",
        hints: ["College comedy", "Engineering students", "Aamir Khan"],
    },
    EmbeddedMovie {
        title: "Sholay",
        emojis: "🤠🔫🐎",
        hints: ["Classic western", "Friendship", "Jai and Veeru"],
    },
];

const TOLLYWOOD: &[EmbeddedMovie] = &[
    EmbeddedMovie {
        title: "Baahubali",
        emojis: "⚔️👑🏰",
        hints: ["Epic drama", "Kingdom war", "Prabhas"],
    },
    EmbeddedMovie {
        title: "Arjun Reddy",
        emojis: "💔🏥💊",
        hints: ["Romance drama", "Medical student", "Intense love story"],
    },
];

const KOLLYWOOD: &[EmbeddedMovie] = &[
    EmbeddedMovie {
        title: "Vikram",
        emojis: "🔍🔫👨‍💼",
        hints: ["Action thriller", "Kamal Haasan", "Drug cartel"],
    },
    EmbeddedMovie {
        title: "Super Deluxe",
        emojis: "🌟🎭🔄",
        hints: ["Anthology", "Multiple stories", "Dark comedy"],
    },
];
