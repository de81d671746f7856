//! Ways to get a second instance past a singleton's accessor, and which
//! strategies they defeat.
//!
//! - **Clone**: a `Clone` impl duplicates the instance.
//! - **Backdoor**: any constructor reachable outside the accessor. Here that
//!   is `Default`; in other ecosystems it is reflection on a private
//!   constructor.
//! - **Serialization**: a round trip through bytes materializes a new value
//!   unless deserialization resolves back to the canonical instance.
//!
//! Strategies that expose none of these handles are immune by construction:
//! the attack does not type-check.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{
    EagerSingleton, EnumSingleton, GuardedSingleton, LazySingleton, Singleton, Strategy,
};
use crate::error::SingletonError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attack {
    Clone,
    Backdoor,
    Serialization,
}

impl Attack {
    pub const ALL: [Attack; 3] = [Attack::Clone, Attack::Backdoor, Attack::Serialization];
}

impl fmt::Display for Attack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Attack::Clone => "clone",
            Attack::Backdoor => "backdoor constructor",
            Attack::Serialization => "serialization round trip",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// A second, non-canonical instance came out.
    Breaks,
    /// The attack ran but only ever produced the canonical instance.
    Survives,
    /// The type detected the attempt and returned an error.
    Refused,
    /// The type exposes no handle for this attack.
    NotApplicable,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Verdict::Breaks => "BREAKS",
            Verdict::Survives => "survives",
            Verdict::Refused => "refused",
            Verdict::NotApplicable => "n/a",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breach {
    pub strategy: Strategy,
    pub attack: Attack,
    pub verdict: Verdict,
}

impl Breach {
    fn judge(strategy: Strategy, attack: Attack, canonical: bool) -> Self {
        let verdict = if canonical {
            Verdict::Survives
        } else {
            warn!(%strategy, %attack, "singleton broken: a second instance exists");
            Verdict::Breaks
        };
        Self {
            strategy,
            attack,
            verdict,
        }
    }

    fn not_applicable(strategy: Strategy, attack: Attack) -> Self {
        Self {
            strategy,
            attack,
            verdict: Verdict::NotApplicable,
        }
    }
}

pub fn clone_attack<S: Singleton + Clone>() -> Breach {
    let copy = S::instance().clone();
    Breach::judge(S::STRATEGY, Attack::Clone, copy.is_canonical())
}

pub fn backdoor_attack<S: Singleton + Default>() -> Breach {
    // Touch the accessor first so the backdoor really is the second construction.
    S::instance();
    let stray = S::default();
    Breach::judge(S::STRATEGY, Attack::Backdoor, stray.is_canonical())
}

/// Backdoor against the guarded constructor, which reports the attempt.
pub fn guarded_backdoor_attack() -> Breach {
    match GuardedSingleton::construct() {
        Ok(stray) => Breach::judge(Strategy::Guarded, Attack::Backdoor, stray.is_canonical()),
        Err(_) => Breach {
            strategy: Strategy::Guarded,
            attack: Attack::Backdoor,
            verdict: Verdict::Refused,
        },
    }
}

/// Round trip into an owned value, with no resolution step.
pub fn serialization_attack<S>() -> Result<Breach, SingletonError>
where
    S: Singleton + Serialize + DeserializeOwned,
{
    let bytes = bincode::serialize(S::instance())?;
    let copy: S = bincode::deserialize(&bytes)?;
    Ok(Breach::judge(
        S::STRATEGY,
        Attack::Serialization,
        copy.is_canonical(),
    ))
}

/// Round trip through a type whose deserializer resolves to the canonical instance.
pub fn resolved_serialization_attack<S>() -> Result<Breach, SingletonError>
where
    S: Singleton + Serialize,
    for<'de> &'static S: Deserialize<'de>,
{
    let bytes = bincode::serialize(S::instance())?;
    let copy: &'static S = bincode::deserialize(&bytes)?;
    Ok(Breach::judge(
        S::STRATEGY,
        Attack::Serialization,
        copy.is_canonical(),
    ))
}

/// Runs every attack that type-checks against every strategy.
///
/// The synchronized, double-checked and static-holder types expose no
/// `Clone`, `Default` or `Deserialize`, so nothing can be mounted against them.
pub fn attack_matrix() -> Result<Vec<Breach>, SingletonError> {
    let mut matrix = vec![
        clone_attack::<EagerSingleton>(),
        backdoor_attack::<EagerSingleton>(),
        Breach::not_applicable(Strategy::Eager, Attack::Serialization),
        Breach::not_applicable(Strategy::Lazy, Attack::Clone),
        backdoor_attack::<LazySingleton>(),
        serialization_attack::<LazySingleton>()?,
    ];

    for strategy in [
        Strategy::Synchronized,
        Strategy::DoubleChecked,
        Strategy::StaticHolder,
    ] {
        matrix.extend(
            Attack::ALL
                .iter()
                .map(|&attack| Breach::not_applicable(strategy, attack)),
        );
    }

    matrix.extend([
        clone_attack::<EnumSingleton>(),
        Breach::not_applicable(Strategy::Enum, Attack::Backdoor),
        serialization_attack::<EnumSingleton>()?,
        Breach::not_applicable(Strategy::Guarded, Attack::Clone),
        guarded_backdoor_attack(),
        resolved_serialization_attack::<GuardedSingleton>()?,
    ]);

    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdict(matrix: &[Breach], strategy: Strategy, attack: Attack) -> Verdict {
        matrix
            .iter()
            .find(|b| b.strategy == strategy && b.attack == attack)
            .map(|b| b.verdict)
            .unwrap()
    }

    #[test]
    fn test_matrix_covers_every_pair() {
        let matrix = attack_matrix().unwrap();
        assert_eq!(matrix.len(), Strategy::ALL.len() * Attack::ALL.len());
        for strategy in Strategy::ALL {
            for attack in Attack::ALL {
                verdict(&matrix, strategy, attack);
            }
        }
    }

    #[test]
    fn test_documented_outcomes() {
        let matrix = attack_matrix().unwrap();

        assert_eq!(verdict(&matrix, Strategy::Eager, Attack::Clone), Verdict::Breaks);
        assert_eq!(verdict(&matrix, Strategy::Eager, Attack::Backdoor), Verdict::Breaks);
        assert_eq!(verdict(&matrix, Strategy::Lazy, Attack::Backdoor), Verdict::Breaks);
        assert_eq!(
            verdict(&matrix, Strategy::Lazy, Attack::Serialization),
            Verdict::Breaks
        );
        assert_eq!(verdict(&matrix, Strategy::Enum, Attack::Clone), Verdict::Survives);
        assert_eq!(
            verdict(&matrix, Strategy::Enum, Attack::Serialization),
            Verdict::Survives
        );
        assert_eq!(
            verdict(&matrix, Strategy::Guarded, Attack::Backdoor),
            Verdict::Refused
        );
        assert_eq!(
            verdict(&matrix, Strategy::Guarded, Attack::Serialization),
            Verdict::Survives
        );
    }

    #[test]
    fn test_no_breach_against_hardened_strategies() {
        let matrix = attack_matrix().unwrap();
        let broken: Vec<_> = matrix
            .iter()
            .filter(|b| b.verdict == Verdict::Breaks)
            .map(|b| b.strategy)
            .collect();

        assert!(!broken.contains(&Strategy::Guarded));
        assert!(!broken.contains(&Strategy::Enum));
        assert!(!broken.contains(&Strategy::DoubleChecked));
    }
}
