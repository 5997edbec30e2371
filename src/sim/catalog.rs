//! Static planet facts and quiz questions

use super::planet::Body;

/// A multiple-choice quiz question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub prompt: &'static str,
    pub answers: [&'static str; 4],
    /// Index into `answers`
    pub correct: usize,
}

const fn q(prompt: &'static str, answers: [&'static str; 4], correct: usize) -> Question {
    Question {
        prompt,
        answers,
        correct,
    }
}

pub fn facts(body: Body) -> &'static [&'static str; 4] {
    match body {
        Body::Mercur => &[
            "Cea mai apropiata planeta de Soare",
            "Cea mai mica planeta din sistemul solar",
            "Un an dureaza doar 88 de zile pamantesti!",
            "Temperatura suprafetei: -173°C pana la 427°C",
        ],
        Body::Venus => &[
            "A doua planeta de la Soare",
            "Cea mai fierbinte planeta din sistem",
            "Atmosfera densa de dioxid de carbon",
            "O zi este mai lunga decat un an!",
        ],
        Body::Pamant => &[
            "Planeta noastra!",
            "Singura planeta cunoscuta cu viata",
            "71% acoperita cu apa",
            "La distanta perfecta de Soare",
        ],
        Body::Marte => &[
            "Planeta Rosie",
            "Are cel mai mare vulcan: Olympus Mons",
            "Doua luni mici: Phobos si Deimos",
            "Posibila viitoare colonie umana",
        ],
        Body::Jupiter => &[
            "Cea mai mare planeta din sistemul solar",
            "O uriasa gazoasa fara suprafata solida",
            "Celebra Pata Rosie Mare este o furtuna",
            "Are 79 de sateliti cunoscuti!",
        ],
        Body::Saturn => &[
            "Celebra pentru inelele sale frumoase",
            "A doua cea mai mare planeta",
            "Formata in mare parte din hidrogen si heliu",
            "Are 82 de sateliti cunoscuti",
        ],
        Body::Uranus => &[
            "Se roteste pe o parte!",
            "Planeta uriasa de gheata",
            "Cea mai rece atmosfera planetara",
            "Are 13 inele slabe",
        ],
        Body::Neptun => &[
            "Cea mai indepartata planeta de Soare",
            "Cele mai puternice vanturi din sistem",
            "Culoare albastra frumoasa din metan",
            "Are 14 sateliti cunoscuti",
        ],
    }
}

const MERCUR: [Question; 5] = [
    q("Mercur este planeta _____ de Soare", ["Cea mai apropiata", "Cea mai indepartata", "A doua", "A treia"], 0),
    q("Cat dureaza un an pe Mercur?", ["88 zile", "365 zile", "12 zile", "200 zile"], 0),
    q("Mercur este planeta _____", ["Cea mai mica", "Cea mai mare", "Cea mai fierbinte", "Cea mai rece"], 0),
    q("Are Mercur atmosfera?", ["Foarte subtire", "Densa", "Deloc", "Ca Pamantul"], 0),
    q("Mercur are _____ extreme", ["Temperaturi", "Vanturi", "Ploi", "Nori"], 0),
];

const VENUS: [Question; 5] = [
    q("Venus este _____ planeta de la Soare", ["A doua", "Prima", "A treia", "A patra"], 0),
    q("Venus este planeta _____", ["Cea mai fierbinte", "Cea mai rece", "Cea mai mare", "Cea mai mica"], 0),
    q("Venus are o atmosfera densa de _____", ["CO2", "Oxigen", "Azot", "Hidrogen"], 0),
    q("Pe Venus, o zi este _____ decat un an", ["Mai lunga", "Mai scurta", "La fel", "Dublu"], 0),
    q("Venus poarta numele zeitei _____", ["Iubirii", "Razboiului", "Marii", "Cerului"], 0),
];

const PAMANT: [Question; 5] = [
    q("Pamantul este acoperit _____ cu apa", ["71%", "50%", "30%", "90%"], 0),
    q("Pamantul este _____ planeta de la Soare", ["A treia", "A doua", "A patra", "Prima"], 0),
    q("Pamantul are _____ satelit(i)", ["Unul", "Doi", "Deloc", "Trei"], 0),
    q("Ce face Pamantul special?", ["Are viata", "Cel mai mare", "Cel mai fierbinte", "Cel mai rapid"], 0),
    q("Atmosfera Pamantului este formata din", ["Azot", "Oxigen", "CO2", "Heliu"], 0),
];

const MARTE: [Question; 5] = [
    q("Marte este numita planeta _____", ["Rosie", "Albastra", "Verde", "Galbena"], 0),
    q("Marte are _____ sateliti", ["Doi", "Unu", "Deloc", "Patru"], 0),
    q("Cel mai mare vulcan este _____", ["Olympus Mons", "Mt. Everest", "Krakatoa", "Vesuvius"], 0),
    q("Marte este _____ decat Pamantul", ["Mai mica", "Mai mare", "Aceeasi marime", "De doua ori mai mare"], 0),
    q("Marte ar fi putut avea odata _____", ["Apa", "Doar viata", "Orase", "Copaci"], 0),
];

const JUPITER: [Question; 5] = [
    q("Jupiter este planeta _____", ["Cea mai mare", "Cea mai mica", "Cea mai fierbinte", "Cea mai apropiata"], 0),
    q("Jupiter este o uriasa _____", ["Gazoasa", "De gheata", "Stancoasa", "Metalica"], 0),
    q("Marea Pata Rosie a lui Jupiter este o", ["Furtuna", "Munte", "Ocean", "Desert"], 0),
    q("Jupiter are aproximativ _____ sateliti", ["79", "1", "12", "200"], 0),
    q("Ai putea sta in picioare pe Jupiter?", ["Nu", "Da", "Poate", "Uneori"], 0),
];

const SATURN: [Question; 5] = [
    q("Saturn este celebru pentru _____", ["Inele", "Culoare", "Marime", "Viteza"], 0),
    q("Saturn este _____ cea mai mare planeta", ["A doua", "Prima", "A treia", "A patra"], 0),
    q("Saturn este format in mare parte din _____", ["Hidrogen", "Piatra", "Apa", "Fier"], 0),
    q("Saturn are _____ sateliti", ["82", "1", "10", "5"], 0),
    q("Saturn este o uriasa _____", ["Gazoasa", "De gheata", "Stancoasa", "Metalica"], 0),
];

const URANUS: [Question; 5] = [
    q("Uranus se roteste pe _____", ["O parte", "Varful", "Normal", "Baza"], 0),
    q("Uranus este o uriasa de _____", ["Gheata", "Gaz", "Piatra", "Metal"], 0),
    q("Uranus are _____ inele", ["13", "0", "1", "100"], 0),
    q("Uranus are cea mai rece _____", ["Atmosfera", "Nucleu", "Inele", "Sateliti"], 0),
    q("Ce culoare este Uranus?", ["Albastru-verde", "Rosu", "Galben", "Violet"], 0),
];

const NEPTUN: [Question; 5] = [
    q("Neptun este planeta _____ de Soare", ["Cea mai indepartata", "Cea mai apropiata", "A doua", "A treia"], 0),
    q("Neptun are cele mai puternice _____", ["Vanturi", "Inele", "Gravitatie", "Caldura"], 0),
    q("Culoarea albastra a lui Neptun vine de la", ["Metan", "Apa", "Gheata", "Nori"], 0),
    q("Neptun are _____ sateliti", ["14", "1", "0", "100"], 0),
    q("Neptun este o uriasa de _____", ["Gheata", "Gaz", "Piatra", "Foc"], 0),
];

pub fn questions(body: Body) -> &'static [Question; 5] {
    match body {
        Body::Mercur => &MERCUR,
        Body::Venus => &VENUS,
        Body::Pamant => &PAMANT,
        Body::Marte => &MARTE,
        Body::Jupiter => &JUPITER,
        Body::Saturn => &SATURN,
        Body::Uranus => &URANUS,
        Body::Neptun => &NEPTUN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_body_has_valid_answer_indices() {
        for body in Body::ALL {
            for question in questions(body) {
                assert!(question.correct < question.answers.len(), "{:?}: {}", body, question.prompt);
                assert!(question.answers.iter().all(|a| !a.is_empty()));
            }
        }
    }

    #[test]
    fn test_answers_have_no_cyrillic_homoglyphs() {
        for body in Body::ALL {
            for question in questions(body) {
                for answer in question.answers {
                    assert!(answer.chars().all(|c| (c as u32) < 0x0400), "{answer}");
                }
            }
        }
    }
}
