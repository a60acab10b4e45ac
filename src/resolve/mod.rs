//! Hit-test resolution.
//!
//! Given a point, the dragged entity and the game state, pick the zone a
//! drop would land in. Resolution is a pure query over any iterator of
//! zones. The drag session ranks its already-validated start-of-drag
//! snapshot with [`rank_in_reach`] while hovering and runs the full
//! [`resolve`] over the live registry on drop.
//!
//! ## Example
//!
//! ```
//! use ccg_drop::core::{Point, Rect, ZoneKind};
//! use ccg_drop::resolve::resolve;
//! use ccg_drop::zones::DropZone;
//!
//! let zones = vec![
//!     DropZone::<(), ()>::builder("discard", ZoneKind::Discard)
//!         .bounds(Rect::new(200.0, 50.0, 100.0, 100.0))
//!         .priority(5)
//!         .build()
//!         .unwrap(),
//!     DropZone::<(), ()>::builder("special", ZoneKind::Special)
//!         .bounds(Rect::new(240.0, 90.0, 100.0, 100.0))
//!         .priority(15)
//!         .build()
//!         .unwrap(),
//! ];
//!
//! let hit = resolve(Point::new(260.0, 120.0), &(), &(), &zones);
//! assert_eq!(hit.unwrap().id().as_str(), "special");
//! ```


pub use hit_test::{
    geometric_hit, rank_in_reach, resolve, resolve_detailed, HitReport, Rejection,
};

pub(crate) use hit_test::by_rank;
