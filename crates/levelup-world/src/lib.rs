//! Per-course worlds for LevelUp
//!
//! A world is the aggregate object everything course-scoped hangs off:
//! the course id and its resolved configuration. This crate provides the
//! world itself, its layered configuration (admin snapshot + course
//! defaults + stored rows), and the memoizing factory that hands out one
//! world per course.

mod course_world;
mod course_world_config;
mod factory;

pub use course_world::CourseWorld;
pub use course_world_config::CourseWorldConfig;
pub use factory::{CourseWorldFactory, WorldFactory};
