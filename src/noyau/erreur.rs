// src/noyau/erreur.rs
//
// Taxonomie des erreurs du noyau.
// Chaque étape échoue à la première erreur (pas de résultat partiel).

pub type Resultat<T> = Result<T, ErreurCalcul>;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ErreurCalcul {
    #[error("l’expression est vide")]
    ExpressionVide,

    #[error("caractère invalide : '{0}'")]
    CaractereInvalide(char),

    #[error("parenthèses déséquilibrées")]
    ParenthesesDesequilibrees,

    #[error("expression invalide : opérandes insuffisants")]
    OperandesInsuffisants,

    #[error("expression invalide")]
    ExpressionMalformee,

    #[error("valeur invalide : {0}")]
    LitteralNumeriqueInvalide(String),

    #[error("division par zéro")]
    DivisionParZero,

    #[error("opérateur inconnu : {0}")]
    OperateurInconnu(String),
}

impl ErreurCalcul {
    /// Étiquette stable du genre d’erreur (traces, tests).
    pub fn genre(&self) -> &'static str {
        match self {
            Self::ExpressionVide => "EmptyExpression",
            Self::CaractereInvalide(_) => "InvalidCharacter",
            Self::ParenthesesDesequilibrees => "UnbalancedParentheses",
            Self::OperandesInsuffisants => "InsufficientOperands",
            Self::ExpressionMalformee => "MalformedExpression",
            Self::LitteralNumeriqueInvalide(_) => "InvalidNumericLiteral",
            Self::DivisionParZero => "DivisionByZero",
            Self::OperateurInconnu(_) => "UnknownOperator",
        }
    }
}
