//! Skeleton rig: the immutable joint-hierarchy definition a sequencer walks.
//!
//! The rig is a validated configuration object passed in at construction
//! time, so alternate skeletons need no code changes. Sequence order defines
//! labeling order; by construction it is also a valid topological order of
//! the joint tree (every parent appears before its children).

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::error::RigError;

/// One named joint. `parent` is `None` only for the root.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct JointDefinition {
    pub name: String,
    pub parent: Option<String>,
}

impl JointDefinition {
    pub fn new(name: impl Into<String>, parent: Option<&str>) -> Self {
        Self {
            name: name.into(),
            parent: parent.map(str::to_string),
        }
    }
}

/// Immutable, validated ordered joint table.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SkeletonRig {
    joints: Vec<JointDefinition>,
}

impl SkeletonRig {
    /// Validate and seal a joint table.
    ///
    /// Invariants: non-empty; unique names; the first joint is the sole
    /// parentless root; every other joint's parent appears earlier in the
    /// sequence; no joint parents itself.
    pub fn new(joints: Vec<JointDefinition>) -> Result<Self, RigError> {
        if joints.is_empty() {
            return Err(RigError::Empty);
        }

        let mut index: HashMap<&str, usize> = HashMap::with_capacity(joints.len());
        for (i, joint) in joints.iter().enumerate() {
            if index.insert(joint.name.as_str(), i).is_some() {
                return Err(RigError::DuplicateJoint {
                    name: joint.name.clone(),
                });
            }
        }

        for (i, joint) in joints.iter().enumerate() {
            match (&joint.parent, i) {
                (None, 0) => {}
                (None, _) => {
                    return Err(RigError::MultipleRoots {
                        name: joint.name.clone(),
                    });
                }
                (Some(_), 0) => {
                    return Err(RigError::RootNotFirst {
                        name: joint.name.clone(),
                    });
                }
                (Some(parent), _) => {
                    if parent == &joint.name {
                        return Err(RigError::SelfParent {
                            name: joint.name.clone(),
                        });
                    }
                    match index.get(parent.as_str()) {
                        None => {
                            return Err(RigError::MissingParent {
                                joint: joint.name.clone(),
                                parent: parent.clone(),
                            });
                        }
                        Some(&parent_index) if parent_index > i => {
                            return Err(RigError::ParentAfterChild {
                                joint: joint.name.clone(),
                                parent: parent.clone(),
                            });
                        }
                        Some(_) => {}
                    }
                }
            }
        }

        drop(index);
        Ok(Self { joints })
    }

    /// The 16-joint humanoid hierarchy used for character drawings.
    pub fn humanoid() -> Self {
        let table = [
            ("root", None),
            ("hip", Some("root")),
            ("torso", Some("hip")),
            ("neck", Some("torso")),
            ("right_shoulder", Some("torso")),
            ("right_elbow", Some("right_shoulder")),
            ("right_hand", Some("right_elbow")),
            ("left_shoulder", Some("torso")),
            ("left_elbow", Some("left_shoulder")),
            ("left_hand", Some("left_elbow")),
            ("right_hip", Some("root")),
            ("right_knee", Some("right_hip")),
            ("right_foot", Some("right_knee")),
            ("left_hip", Some("root")),
            ("left_knee", Some("left_hip")),
            ("left_foot", Some("left_knee")),
        ];
        let joints = table
            .into_iter()
            .map(|(name, parent)| JointDefinition::new(name, parent))
            .collect();
        Self::new(joints).expect("humanoid joint table is valid")
    }

    pub fn len(&self) -> usize {
        self.joints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.joints.is_empty()
    }

    /// Definition at `index % len`, so a cyclic cursor never misses.
    pub fn joint(&self, index: usize) -> &JointDefinition {
        &self.joints[index % self.joints.len()]
    }

    pub fn joints(&self) -> &[JointDefinition] {
        &self.joints
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn humanoid_rig_has_sixteen_joints_rooted_first() {
        let rig = SkeletonRig::humanoid();
        assert_eq!(rig.len(), 16);
        assert_eq!(rig.joint(0).name, "root");
        assert_eq!(rig.joint(0).parent, None);
        assert_eq!(rig.joint(15).name, "left_foot");
        // cyclic lookup wraps
        assert_eq!(rig.joint(16).name, "root");
    }

    #[test]
    fn rejects_duplicate_names() {
        let joints = vec![
            JointDefinition::new("root", None),
            JointDefinition::new("hip", Some("root")),
            JointDefinition::new("hip", Some("root")),
        ];
        assert_eq!(
            SkeletonRig::new(joints),
            Err(RigError::DuplicateJoint {
                name: "hip".to_string()
            })
        );
    }

    #[test]
    fn rejects_unknown_and_forward_parents() {
        let joints = vec![
            JointDefinition::new("root", None),
            JointDefinition::new("knee", Some("hip")),
        ];
        assert_eq!(
            SkeletonRig::new(joints),
            Err(RigError::MissingParent {
                joint: "knee".to_string(),
                parent: "hip".to_string()
            })
        );

        let joints = vec![
            JointDefinition::new("root", None),
            JointDefinition::new("knee", Some("hip")),
            JointDefinition::new("hip", Some("root")),
        ];
        assert_eq!(
            SkeletonRig::new(joints),
            Err(RigError::ParentAfterChild {
                joint: "knee".to_string(),
                parent: "hip".to_string()
            })
        );
    }

    #[test]
    fn rejects_second_root_and_rootless_head() {
        let joints = vec![
            JointDefinition::new("root", None),
            JointDefinition::new("stray", None),
        ];
        assert_eq!(
            SkeletonRig::new(joints),
            Err(RigError::MultipleRoots {
                name: "stray".to_string()
            })
        );

        let joints = vec![JointDefinition::new("hip", Some("root"))];
        assert_eq!(
            SkeletonRig::new(joints),
            Err(RigError::RootNotFirst {
                name: "hip".to_string()
            })
        );
    }

    #[test]
    fn rejects_self_parent_and_empty() {
        assert_eq!(SkeletonRig::new(Vec::new()), Err(RigError::Empty));

        let joints = vec![
            JointDefinition::new("root", None),
            JointDefinition::new("hip", Some("hip")),
        ];
        assert_eq!(
            SkeletonRig::new(joints),
            Err(RigError::SelfParent {
                name: "hip".to_string()
            })
        );
    }
}
