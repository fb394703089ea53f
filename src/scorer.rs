use serde::Serialize;

/// Scores below this are `Low`.
pub const MID_THRESHOLD: u32 = 35;
/// Scores above this are `High`.
pub const HIGH_THRESHOLD: u32 = 70;

/// Feedback band a completed score falls in.
///
/// The cutoffs are absolute and were set for the 24-question set; they are
/// not rescaled when the question count changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Low,
    Mid,
    High,
}

impl Tier {
    pub fn of(score: u32) -> Self {
        match score {
            score if score < MID_THRESHOLD => Tier::Low,
            MID_THRESHOLD..=HIGH_THRESHOLD => Tier::Mid,
            _ => Tier::High,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Tier::Low => "Estás comenzando tu camino de autoconocimiento y reflexión vocacional. Es un buen momento para abrirte a nuevas experiencias, buscar apoyo y explorar tus intereses con libertad.",
            Tier::Mid => "Estás en proceso de descubrimiento. Tenés curiosidad, inquietudes y algunos aspectos definidos, pero todavía podés seguir profundizando tu búsqueda personal y profesional.",
            Tier::High => "Mostrás una actitud activa, reflexiva y comprometida con el futuro. Estás desarrollando una mirada clara sobre lo que te gusta, tus talentos y posibilidades, incluso con una visión emprendedora. Seguí así: estás en un muy buen camino.",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tier::Low => write!(f, "low"),
            Tier::Mid => write!(f, "mid"),
            Tier::High => write!(f, "high"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub score: u32,
    pub tier: Tier,
    pub message: &'static str,
}

pub fn classify(score: u32) -> Classification {
    let tier = Tier::of(score);
    Classification {
        score,
        tier,
        message: tier.message(),
    }
}
