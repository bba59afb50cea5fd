// ABOUTME: Static exercise catalog with movement slots, substitution chains, and contraindications
// ABOUTME: Parses free-text injuries into limitations and resolves the first safe movement per slot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Exercise Catalog
//!
//! Each training day is a list of [`Slot`]s. A slot names a movement intent and
//! an ordered list of candidate movements; the first candidate that none of the
//! user's [`Limitation`]s rule out is prescribed.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Body region a user reported as injured or limited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Limitation {
    /// Lower back or spine
    LowerBack,
    /// Knee
    Knee,
    /// Shoulder
    Shoulder,
    /// Wrist
    Wrist,
    /// Elbow
    Elbow,
    /// Hip
    Hip,
    /// Ankle
    Ankle,
    /// Neck
    Neck,
}

impl Limitation {
    /// Every limitation the catalog knows about
    pub const ALL: [Self; 8] = [
        Self::LowerBack,
        Self::Knee,
        Self::Shoulder,
        Self::Wrist,
        Self::Elbow,
        Self::Hip,
        Self::Ankle,
        Self::Neck,
    ];

    const fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::LowerBack => &["lower back", "back pain", "spine", "disc", "sciatica"],
            Self::Knee => &["knee", "acl", "mcl", "meniscus", "patella"],
            Self::Shoulder => &["shoulder", "rotator", "labrum"],
            Self::Wrist => &["wrist", "carpal"],
            Self::Elbow => &["elbow", "epicondyl"],
            Self::Hip => &["hip"],
            Self::Ankle => &["ankle", "achilles"],
            Self::Neck => &["neck", "cervical"],
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::LowerBack => "lower back",
            Self::Knee => "knee",
            Self::Shoulder => "shoulder",
            Self::Wrist => "wrist",
            Self::Elbow => "elbow",
            Self::Hip => "hip",
            Self::Ankle => "ankle",
            Self::Neck => "neck",
        }
    }

    /// Extract limitations from free text by case-insensitive keyword match
    #[must_use]
    pub fn parse_all(text: &str) -> BTreeSet<Self> {
        let lowered = text.to_lowercase();
        Self::ALL
            .into_iter()
            .filter(|limitation| {
                limitation
                    .keywords()
                    .iter()
                    .any(|keyword| lowered.contains(keyword))
            })
            .collect()
    }
}

impl fmt::Display for Limitation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How a movement is prescribed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementKind {
    /// Multi-joint strength lift
    Compound,
    /// Single-joint or stability work
    Accessory,
    /// Timed interval work
    Conditioning,
}

/// A catalog movement
#[derive(Debug, Clone, Copy)]
pub struct Movement {
    /// Display name, also used as the exercise log key
    pub name: &'static str,
    /// Prescription category
    pub kind: MovementKind,
    /// Coaching cue
    pub cue: &'static str,
    /// Limitations that rule this movement out
    pub contraindications: &'static [Limitation],
}

impl Movement {
    /// Limitations from `limitations` that rule this movement out
    pub fn conflicts<'a>(
        &'a self,
        limitations: &'a BTreeSet<Limitation>,
    ) -> impl Iterator<Item = Limitation> + 'a {
        self.contraindications
            .iter()
            .copied()
            .filter(|limitation| limitations.contains(limitation))
    }

    /// Whether no limitation in `limitations` rules this movement out
    #[must_use]
    pub fn is_safe_for(&self, limitations: &BTreeSet<Limitation>) -> bool {
        self.conflicts(limitations).next().is_none()
    }
}

/// Movement intent with ordered substitutes
#[derive(Debug, Clone, Copy)]
pub struct Slot {
    /// Muscle-group intent, e.g. "knee-dominant legs"
    pub intent: &'static str,
    /// Preferred movement first
    pub candidates: &'static [Movement],
}

/// Result of resolving a slot against a set of limitations
#[derive(Debug, Clone, Copy)]
pub struct Resolved {
    /// Movement to prescribe
    pub movement: Movement,
    /// Preferred movement that was skipped, if any
    pub replaced: Option<Movement>,
}

impl Slot {
    /// First candidate that is safe and not in `exclude`
    ///
    /// Returns `None` when every candidate is ruled out; the slot is then dropped.
    #[must_use]
    pub fn resolve(
        &self,
        limitations: &BTreeSet<Limitation>,
        exclude: &BTreeSet<&str>,
    ) -> Option<Resolved> {
        let preferred = self.candidates.first().copied()?;
        self.candidates
            .iter()
            .copied()
            .find(|movement| movement.is_safe_for(limitations) && !exclude.contains(movement.name))
            .map(|movement| Resolved {
                movement,
                replaced: (movement.name != preferred.name).then_some(preferred),
            })
    }
}

/// Whether `name` is a catalog movement ruled out by `limitations`
#[must_use]
pub fn is_contraindicated(name: &str, limitations: &BTreeSet<Limitation>) -> bool {
    ALL_SLOTS
        .iter()
        .flat_map(|slot| slot.candidates.iter())
        .filter(|movement| movement.name == name)
        .any(|movement| !movement.is_safe_for(limitations))
}

macro_rules! movement {
    ($name:expr, $kind:ident, $cue:expr, [$($limitation:ident),*]) => {
        Movement {
            name: $name,
            kind: MovementKind::$kind,
            cue: $cue,
            contraindications: &[$(Limitation::$limitation),*],
        }
    };
}

const BACK_SQUAT: Movement = movement!(
    "Barbell Back Squat",
    Compound,
    "Keep your chest up and drive through the mid-foot",
    [Knee, LowerBack]
);
const GOBLET_SQUAT: Movement = movement!(
    "Goblet Squat",
    Compound,
    "Hold the weight at chest height and sit between your hips",
    [Knee]
);
const LEG_PRESS: Movement = movement!(
    "Leg Press",
    Compound,
    "Lower under control without letting your lower back round",
    [Knee, Hip]
);
const GLUTE_BRIDGE: Movement = movement!(
    "Glute Bridge",
    Accessory,
    "Squeeze your glutes at the top and pause for a second",
    []
);
const ROMANIAN_DEADLIFT: Movement = movement!(
    "Romanian Deadlift",
    Compound,
    "Push your hips back and keep the bar close to your legs",
    [LowerBack]
);
const BACK_EXTENSION: Movement = movement!(
    "Back Extension",
    Accessory,
    "Hinge from the hips and stop at a straight line",
    [Hip]
);
const BENCH_PRESS: Movement = movement!(
    "Barbell Bench Press",
    Compound,
    "Retract your shoulder blades and lower the bar to mid-chest",
    [Shoulder, Wrist]
);
const DUMBBELL_BENCH_PRESS: Movement = movement!(
    "Dumbbell Bench Press",
    Compound,
    "Keep elbows around 45 degrees from your torso",
    [Shoulder]
);
const PUSH_UP: Movement = movement!(
    "Push-Up",
    Compound,
    "Keep a rigid plank from head to heels",
    [Wrist]
);
const FLOOR_PRESS: Movement = movement!(
    "Dumbbell Floor Press",
    Compound,
    "Pause with your upper arms on the floor before pressing",
    [Elbow]
);
const OVERHEAD_PRESS: Movement = movement!(
    "Overhead Press",
    Compound,
    "Brace your core and press straight over your head",
    [Shoulder, LowerBack, Neck]
);
const SEATED_DUMBBELL_PRESS: Movement = movement!(
    "Seated Dumbbell Press",
    Compound,
    "Keep your back against the pad and press without shrugging",
    [Shoulder, Neck]
);
const LANDMINE_PRESS: Movement = movement!(
    "Landmine Press",
    Compound,
    "Press up and slightly forward along the bar's arc",
    [Wrist]
);
const BARBELL_ROW: Movement = movement!(
    "Barbell Row",
    Compound,
    "Hold a flat back and pull the bar to your lower ribs",
    [LowerBack]
);
const CHEST_SUPPORTED_ROW: Movement = movement!(
    "Chest-Supported Dumbbell Row",
    Compound,
    "Keep your chest on the pad and lead with the elbows",
    []
);
const PULL_UP: Movement = movement!(
    "Pull-Up",
    Compound,
    "Start from a dead hang and pull your chest to the bar",
    [Shoulder, Elbow]
);
const LAT_PULLDOWN: Movement = movement!(
    "Lat Pulldown",
    Compound,
    "Pull the bar to your upper chest and control the return",
    [Shoulder]
);
const STRAIGHT_ARM_PULLDOWN: Movement = movement!(
    "Straight-Arm Pulldown",
    Accessory,
    "Keep a soft bend in the elbows and sweep to your thighs",
    [Elbow]
);
const WALKING_LUNGE: Movement = movement!(
    "Walking Lunge",
    Compound,
    "Take long steps and keep your front knee over the foot",
    [Knee, Ankle]
);
const STEP_UP: Movement = movement!(
    "Step-Up",
    Compound,
    "Drive through the heel of the working leg",
    [Knee]
);
const HIP_THRUST: Movement = movement!(
    "Hip Thrust",
    Compound,
    "Tuck your chin and finish with a full hip lockout",
    [Hip]
);
const STANDING_CALF_RAISE: Movement = movement!(
    "Standing Calf Raise",
    Accessory,
    "Pause at the bottom stretch and rise fully onto your toes",
    [Ankle]
);
const SEATED_CALF_RAISE: Movement = movement!(
    "Seated Calf Raise",
    Accessory,
    "Move slowly through the full range",
    [Ankle]
);
const BARBELL_CURL: Movement = movement!(
    "Barbell Curl",
    Accessory,
    "Pin your elbows to your sides and avoid swinging",
    [Wrist, Elbow]
);
const HAMMER_CURL: Movement = movement!(
    "Dumbbell Hammer Curl",
    Accessory,
    "Keep a neutral grip and lower slowly",
    [Elbow]
);
const SKULL_CRUSHER: Movement = movement!(
    "Skull Crusher",
    Accessory,
    "Lower the weight behind your head with still upper arms",
    [Elbow, Shoulder]
);
const TRICEPS_PUSHDOWN: Movement = movement!(
    "Cable Triceps Pushdown",
    Accessory,
    "Lock your elbows at your sides and extend fully",
    [Elbow]
);
const LATERAL_RAISE: Movement = movement!(
    "Lateral Raise",
    Accessory,
    "Lead with the elbows and stop at shoulder height",
    [Shoulder]
);
const FACE_PULL: Movement = movement!(
    "Cable Face Pull",
    Accessory,
    "Pull toward your eyes and rotate the hands back",
    [Neck]
);
const PLANK: Movement = movement!(
    "Plank",
    Accessory,
    "Squeeze glutes and keep a straight line from head to heels",
    [Shoulder, Wrist]
);
const DEAD_BUG: Movement = movement!(
    "Dead Bug",
    Accessory,
    "Press your lower back into the floor throughout",
    []
);
const PALLOF_PRESS: Movement = movement!(
    "Pallof Press",
    Accessory,
    "Resist rotation and keep your hips square",
    []
);
const FARMERS_CARRY: Movement = movement!(
    "Farmer's Carry",
    Accessory,
    "Walk tall with short, quick steps",
    [Wrist, LowerBack]
);
const JUMP_ROPE: Movement = movement!(
    "Jump Rope Intervals",
    Conditioning,
    "Stay light on the balls of your feet",
    [Ankle, Knee]
);
const ROWER: Movement = movement!(
    "Rowing Machine Intervals",
    Conditioning,
    "Legs, then hips, then arms on every stroke",
    [LowerBack]
);
const BIKE: Movement = movement!(
    "Stationary Bike Intervals",
    Conditioning,
    "Keep cadence high and resistance moderate",
    [Knee]
);
const INCLINE_WALK: Movement = movement!(
    "Incline Treadmill Walk",
    Conditioning,
    "Stay upright and avoid holding the rails",
    [Ankle]
);

/// Mobility work prescribed on active-recovery days
pub const MOBILITY_FLOW: [Movement; 3] = [
    movement!(
        "Cat-Cow Mobility",
        Accessory,
        "Move slowly with your breath",
        []
    ),
    movement!(
        "World's Greatest Stretch",
        Accessory,
        "Hold each position for two breaths",
        []
    ),
    movement!(
        "Easy Walk",
        Conditioning,
        "Conversational pace only",
        []
    ),
];

const SQUAT_PATTERN: Slot = Slot {
    intent: "knee-dominant legs",
    candidates: &[BACK_SQUAT, GOBLET_SQUAT, LEG_PRESS, GLUTE_BRIDGE],
};
const HINGE_PATTERN: Slot = Slot {
    intent: "hip hinge",
    candidates: &[ROMANIAN_DEADLIFT, BACK_EXTENSION, GLUTE_BRIDGE],
};
const HORIZONTAL_PUSH: Slot = Slot {
    intent: "horizontal push",
    candidates: &[BENCH_PRESS, DUMBBELL_BENCH_PRESS, PUSH_UP, FLOOR_PRESS],
};
const VERTICAL_PUSH: Slot = Slot {
    intent: "vertical push",
    candidates: &[OVERHEAD_PRESS, SEATED_DUMBBELL_PRESS, LANDMINE_PRESS],
};
const HORIZONTAL_PULL: Slot = Slot {
    intent: "horizontal pull",
    candidates: &[BARBELL_ROW, CHEST_SUPPORTED_ROW],
};
const VERTICAL_PULL: Slot = Slot {
    intent: "vertical pull",
    candidates: &[PULL_UP, LAT_PULLDOWN, STRAIGHT_ARM_PULLDOWN],
};
const SINGLE_LEG: Slot = Slot {
    intent: "single-leg",
    candidates: &[WALKING_LUNGE, STEP_UP, HIP_THRUST],
};
const CALVES: Slot = Slot {
    intent: "calves",
    candidates: &[STANDING_CALF_RAISE, SEATED_CALF_RAISE],
};
const BICEPS: Slot = Slot {
    intent: "biceps",
    candidates: &[BARBELL_CURL, HAMMER_CURL],
};
const TRICEPS: Slot = Slot {
    intent: "triceps",
    candidates: &[SKULL_CRUSHER, TRICEPS_PUSHDOWN],
};
const DELTS: Slot = Slot {
    intent: "shoulder health",
    candidates: &[LATERAL_RAISE, FACE_PULL],
};
const CORE: Slot = Slot {
    intent: "core",
    candidates: &[PLANK, DEAD_BUG],
};
const ANTI_ROTATION: Slot = Slot {
    intent: "anti-rotation core",
    candidates: &[PALLOF_PRESS],
};
const CARRY: Slot = Slot {
    intent: "loaded carry",
    candidates: &[FARMERS_CARRY, DEAD_BUG],
};

/// Conditioning finisher added to every training day for weight loss
pub const CONDITIONING_FINISHER: Slot = Slot {
    intent: "conditioning",
    candidates: &[JUMP_ROPE, ROWER, BIKE, INCLINE_WALK],
};

const ALL_SLOTS: [Slot; 16] = [
    SQUAT_PATTERN,
    HINGE_PATTERN,
    HORIZONTAL_PUSH,
    VERTICAL_PUSH,
    HORIZONTAL_PULL,
    VERTICAL_PULL,
    SINGLE_LEG,
    CALVES,
    BICEPS,
    TRICEPS,
    DELTS,
    CORE,
    ANTI_ROTATION,
    CARRY,
    CONDITIONING_FINISHER,
    Slot {
        intent: "mobility",
        candidates: &MOBILITY_FLOW,
    },
];

/// Session focus within a split
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitDay {
    /// Single full-body session
    FullBody,
    /// First of two alternating full-body sessions
    FullBodyA,
    /// Second of two alternating full-body sessions
    FullBodyB,
    /// Chest, shoulders, triceps
    Push,
    /// Back, biceps
    Pull,
    /// Lower body
    Legs,
    /// Upper body
    Upper,
    /// Lower body (upper/lower split)
    Lower,
    /// Intervals and trunk work
    ConditioningCore,
}

impl SplitDay {
    /// Day type label written to the plan
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FullBody => "Full Body",
            Self::FullBodyA => "Full Body A",
            Self::FullBodyB => "Full Body B",
            Self::Push => "Push",
            Self::Pull => "Pull",
            Self::Legs => "Legs",
            Self::Upper => "Upper Body",
            Self::Lower => "Lower Body",
            Self::ConditioningCore => "Conditioning & Core",
        }
    }

    /// Ordered slots for this session
    ///
    /// Every session has at least one slot with a candidate free of
    /// contraindications, so no training day resolves to zero exercises.
    #[must_use]
    pub const fn slots(self) -> &'static [Slot] {
        match self {
            Self::FullBody | Self::FullBodyA => {
                &[SQUAT_PATTERN, HORIZONTAL_PUSH, HORIZONTAL_PULL, CORE]
            }
            Self::FullBodyB => &[HINGE_PATTERN, VERTICAL_PUSH, VERTICAL_PULL, SINGLE_LEG, CORE],
            Self::Push => &[HORIZONTAL_PUSH, VERTICAL_PUSH, DELTS, TRICEPS, CORE],
            Self::Pull => &[VERTICAL_PULL, HORIZONTAL_PULL, DELTS, BICEPS, CORE],
            Self::Legs => &[SQUAT_PATTERN, HINGE_PATTERN, SINGLE_LEG, CALVES, CORE],
            Self::Upper => &[
                HORIZONTAL_PUSH,
                HORIZONTAL_PULL,
                VERTICAL_PUSH,
                VERTICAL_PULL,
                BICEPS,
                TRICEPS,
            ],
            Self::Lower => &[HINGE_PATTERN, SQUAT_PATTERN, SINGLE_LEG, CALVES, CORE],
            Self::ConditioningCore => &[CONDITIONING_FINISHER, CORE, ANTI_ROTATION, CARRY],
        }
    }
}
