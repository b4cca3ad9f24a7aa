//! Item kinds and the effectiveness table between them.
//!
//! Every pair of kinds resolves through a single lookup table indexed by the
//! kind discriminants. Adding a kind means adding one row and one column; no
//! per-kind dispatch methods exist anywhere else.
//!
//! # Triangles
//!
//! ```text
//! Physical: Sword > Axe > Spear > Sword     (Bow is outside, always Normal)
//! Magic:    Light > Darkness > Soul > Light
//! Support:  Staff                           (recovery only, always Normal)
//! ```
//!
//! When `A > B`, the table holds `Resistant` for the attacking pair `(A, B)` and
//! `Weak` for `(B, A)`. Cross-category and same-kind pairs are `Normal`.

use strum::EnumCount;

/// Closed set of equippable item kinds.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ItemKind {
    Sword,
    Axe,
    Spear,
    Bow,
    Light,
    Darkness,
    Soul,
    Staff,
}

/// Family an item kind belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemCategory {
    Physical,
    Magic,
    Support,
}

impl ItemKind {
    pub const fn category(self) -> ItemCategory {
        match self {
            ItemKind::Sword | ItemKind::Axe | ItemKind::Spear | ItemKind::Bow => {
                ItemCategory::Physical
            }
            ItemKind::Light | ItemKind::Darkness | ItemKind::Soul => ItemCategory::Magic,
            ItemKind::Staff => ItemCategory::Support,
        }
    }

    /// Returns true for items that restore hit points instead of dealing damage.
    pub const fn is_recovery(self) -> bool {
        matches!(self, ItemKind::Staff)
    }

    const fn index(self) -> usize {
        self as usize
    }
}

/// Classification of one item's strike against another.
///
/// The naming follows the classic rules: the kind on the losing side of a
/// triangle is `Weak` and strikes for the multiplied amount, while the winning
/// side is `Resistant` and strikes for the penalised amount.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Effectiveness {
    Normal,
    Weak,
    Resistant,
}

impl Effectiveness {
    /// Classification seen from the other side of the same pair.
    pub const fn inverse(self) -> Self {
        match self {
            Effectiveness::Normal => Effectiveness::Normal,
            Effectiveness::Weak => Effectiveness::Resistant,
            Effectiveness::Resistant => Effectiveness::Weak,
        }
    }
}

const N: Effectiveness = Effectiveness::Normal;
const W: Effectiveness = Effectiveness::Weak;
const R: Effectiveness = Effectiveness::Resistant;

/// Rows are the attacking kind, columns the defending kind, both in
/// declaration order of [`ItemKind`].
#[rustfmt::skip]
const EFFECTIVENESS: [[Effectiveness; ItemKind::COUNT]; ItemKind::COUNT] = [
    //            Sword Axe Spear Bow Light Dark Soul Staff
    /* Sword    */ [N,   R,  W,    N,  N,    N,   N,   N],
    /* Axe      */ [W,   N,  R,    N,  N,    N,   N,   N],
    /* Spear    */ [R,   W,  N,    N,  N,    N,   N,   N],
    /* Bow      */ [N,   N,  N,    N,  N,    N,   N,   N],
    /* Light    */ [N,   N,  N,    N,  N,    R,   W,   N],
    /* Darkness */ [N,   N,  N,    N,  W,    N,   R,   N],
    /* Soul     */ [N,   N,  N,    N,  R,    W,   N,   N],
    /* Staff    */ [N,   N,  N,    N,  N,    N,   N,   N],
];

/// Classifies an attacker's item kind against a defender's item kind.
///
/// Total over every ordered pair.
pub const fn effectiveness_of(attacker: ItemKind, defender: ItemKind) -> Effectiveness {
    EFFECTIVENESS[attacker.index()][defender.index()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    /// `(winner, loser)` pairs of both triangles.
    const ADVANTAGES: [(ItemKind, ItemKind); 6] = [
        (ItemKind::Sword, ItemKind::Axe),
        (ItemKind::Axe, ItemKind::Spear),
        (ItemKind::Spear, ItemKind::Sword),
        (ItemKind::Light, ItemKind::Darkness),
        (ItemKind::Darkness, ItemKind::Soul),
        (ItemKind::Soul, ItemKind::Light),
    ];

    fn expected(attacker: ItemKind, defender: ItemKind) -> Effectiveness {
        if ADVANTAGES.contains(&(attacker, defender)) {
            Effectiveness::Resistant
        } else if ADVANTAGES.contains(&(defender, attacker)) {
            Effectiveness::Weak
        } else {
            Effectiveness::Normal
        }
    }

    #[test]
    fn table_matches_triangles_for_every_pair() {
        for attacker in ItemKind::iter() {
            for defender in ItemKind::iter() {
                assert_eq!(
                    effectiveness_of(attacker, defender),
                    expected(attacker, defender),
                    "{attacker} vs {defender}"
                );
            }
        }
    }

    #[test]
    fn relation_is_antisymmetric() {
        for a in ItemKind::iter() {
            for b in ItemKind::iter() {
                assert_eq!(
                    effectiveness_of(b, a),
                    effectiveness_of(a, b).inverse(),
                    "{a} / {b}"
                );
            }
        }
    }

    #[test]
    fn same_kind_is_neutral() {
        for kind in ItemKind::iter() {
            assert_eq!(effectiveness_of(kind, kind), Effectiveness::Normal);
        }
    }

    #[test]
    fn cross_category_pairs_are_neutral() {
        for a in ItemKind::iter() {
            for b in ItemKind::iter() {
                if a.category() != b.category() {
                    assert_eq!(effectiveness_of(a, b), Effectiveness::Normal, "{a} vs {b}");
                }
            }
        }
    }

    #[test]
    fn bow_and_staff_sit_outside_the_triangles() {
        for other in ItemKind::iter() {
            assert_eq!(effectiveness_of(ItemKind::Bow, other), Effectiveness::Normal);
            assert_eq!(effectiveness_of(other, ItemKind::Bow), Effectiveness::Normal);
            assert_eq!(effectiveness_of(ItemKind::Staff, other), Effectiveness::Normal);
            assert_eq!(effectiveness_of(other, ItemKind::Staff), Effectiveness::Normal);
        }
    }

    #[test]
    fn sword_against_axe() {
        assert_eq!(
            effectiveness_of(ItemKind::Sword, ItemKind::Axe),
            Effectiveness::Resistant
        );
        assert_eq!(effectiveness_of(ItemKind::Axe, ItemKind::Sword), Effectiveness::Weak);
    }

    #[test]
    fn categories() {
        assert_eq!(ItemKind::Bow.category(), ItemCategory::Physical);
        assert_eq!(ItemKind::Soul.category(), ItemCategory::Magic);
        assert_eq!(ItemKind::Staff.category(), ItemCategory::Support);
        assert!(ItemKind::Staff.is_recovery());
        assert!(!ItemKind::Light.is_recovery());
    }

    #[test]
    fn kinds_parse_from_content_strings() {
        assert_eq!("darkness".parse::<ItemKind>(), Ok(ItemKind::Darkness));
        assert_eq!("SPEAR".parse::<ItemKind>(), Ok(ItemKind::Spear));
        assert!("anima".parse::<ItemKind>().is_err());
        assert_eq!(ItemKind::Darkness.as_ref(), "darkness");
    }
}
