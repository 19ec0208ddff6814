//! Id-keyed circle collection with change notification.

use crate::circle::{Circle, CircleId, DEFAULT_RADIUS};
use crate::observable::Observable;
use kurbo::Point;
use std::collections::HashMap;

/// Circles keyed by id, iterated in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CircleSet {
    circles: HashMap<CircleId, Circle>,
    /// Insertion order (also the hit-test priority).
    order: Vec<CircleId>,
}

impl CircleSet {
    /// Get circles in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Circle> {
        self.order.iter().filter_map(|id| self.circles.get(id))
    }

    /// Get a circle by id.
    pub fn get(&self, id: CircleId) -> Option<&Circle> {
        self.circles.get(&id)
    }

    pub fn contains(&self, id: CircleId) -> bool {
        self.circles.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Ids in insertion order.
    pub fn ids(&self) -> &[CircleId] {
        &self.order
    }

    fn insert(&mut self, circle: Circle) {
        self.order.push(circle.id);
        self.circles.insert(circle.id, circle);
    }

    fn remove(&mut self, id: CircleId) -> Option<Circle> {
        self.order.retain(|&circle_id| circle_id != id);
        self.circles.remove(&id)
    }

    fn get_mut(&mut self, id: CircleId) -> Option<&mut Circle> {
        self.circles.get_mut(&id)
    }

    /// Visit every circle mutably in insertion order.
    fn for_each_mut(&mut self, mut f: impl FnMut(&mut Circle)) {
        for id in &self.order {
            if let Some(circle) = self.circles.get_mut(id) {
                f(circle);
            }
        }
    }
}

/// Old and new radius reported by [`CircleStore::set_radius`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusChange {
    /// Radius before the call, `None` if no circle matched.
    pub old: Option<f64>,
    pub new: f64,
}

/// Mutable circle collection.
///
/// Every mutator notifies subscribers exactly once, after the mutation has
/// completed.
#[derive(Debug)]
pub struct CircleStore {
    circles: Observable<CircleSet>,
    next_id: CircleId,
    default_radius: f64,
}

impl Default for CircleStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CircleStore {
    /// Create an empty store. The first assigned id is 1.
    pub fn new() -> Self {
        Self::with_default_radius(DEFAULT_RADIUS)
    }

    /// Create an empty store whose new circles get `radius`.
    pub fn with_default_radius(radius: f64) -> Self {
        Self {
            circles: Observable::default(),
            next_id: 1,
            default_radius: radius,
        }
    }

    /// Add a circle with a freshly assigned id.
    pub fn add(&mut self, center: Point) -> Circle {
        let id = self.next_id;
        self.next_id += 1;
        self.insert(Circle::new(id, center, self.default_radius))
    }

    /// Add a circle reusing `id`, leaving the id counter untouched.
    ///
    /// Used to restore a removed circle with its original identity. If the
    /// id is already taken the existing circle is returned unchanged.
    pub fn add_with_id(&mut self, center: Point, id: CircleId) -> Circle {
        if let Some(existing) = self.find(id).cloned() {
            log::warn!("circle {} already exists, not re-adding", id);
            self.circles.modify(|_| ());
            return existing;
        }
        self.insert(Circle::new(id, center, self.default_radius))
    }

    fn insert(&mut self, circle: Circle) -> Circle {
        self.circles.modify(|set| set.insert(circle.clone()));
        circle
    }

    /// Remove a circle. Does nothing to the collection if the id is unknown.
    pub fn remove(&mut self, id: CircleId) -> Option<Circle> {
        self.circles.modify(|set| set.remove(id))
    }

    /// Set the radius of one circle, leaving the others unchanged.
    pub fn set_radius(&mut self, id: CircleId, radius: f64) -> RadiusChange {
        let old = self.circles.modify(|set| {
            set.get_mut(id)
                .map(|circle| std::mem::replace(&mut circle.radius, radius))
        });
        RadiusChange { old, new: radius }
    }

    /// Find a circle by id.
    pub fn find(&self, id: CircleId) -> Option<&Circle> {
        self.circles.get().get(id)
    }

    /// Find the first circle, in insertion order, matching `predicate`.
    pub fn find_by(&self, mut predicate: impl FnMut(&Circle) -> bool) -> Option<&Circle> {
        self.circles.get().iter().find(|&circle| predicate(circle))
    }

    /// Find the first circle, in insertion order, containing `point`.
    pub fn hit_test(&self, point: Point) -> Option<&Circle> {
        self.find_by(|circle| circle.contains(point))
    }

    /// Apply `f` to every circle as one notified change.
    pub fn modify_each(&mut self, mut f: impl FnMut(&mut Circle)) {
        self.circles.modify(|set| set.for_each_mut(&mut f));
    }

    /// Register a callback invoked with the collection after every mutation.
    pub fn subscribe(&mut self, observer: impl FnMut(&CircleSet) + 'static) {
        self.circles.subscribe(observer);
    }

    /// Get the current collection.
    pub fn circles(&self) -> &CircleSet {
        self.circles.get()
    }

    /// Id the next [`add`](Self::add) will assign.
    pub fn next_id(&self) -> CircleId {
        self.next_id
    }

    pub fn default_radius(&self) -> f64 {
        self.default_radius
    }

    pub fn len(&self) -> usize {
        self.circles.get().len()
    }

    pub fn is_empty(&self) -> bool {
        self.circles.get().is_empty()
    }
}
