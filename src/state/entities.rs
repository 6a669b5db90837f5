// Random-walking player markers drawn over the map.

use rand::Rng;

use crate::model::{Point, Size};

/// Per-axis displacement bound for one step, in world units.
pub const STEP_JITTER: f64 = 2.0;
/// Heading perturbation bound for one step, in degrees.
pub const HEADING_JITTER: f64 = 0.5;
pub const MARKER_RADIUS: f64 = 3.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityColor {
    Blue,
    Green,
}

impl EntityColor {
    pub fn css(self) -> &'static str {
        match self {
            EntityColor::Blue => "blue",
            EntityColor::Green => "green",
        }
    }
}

fn wrap_degrees(deg: f64) -> f64 {
    let wrapped = deg.rem_euclid(360.0);
    // rem_euclid rounds tiny negatives up to exactly 360
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
    pub position: Point,
    /// Degrees, kept in `[0, 360)`.
    pub heading: f64,
    pub radius: f64,
    pub color: EntityColor,
}

impl Entity {
    pub fn new(position: Point, heading: f64, color: EntityColor) -> Self {
        Self {
            position,
            heading: wrap_degrees(heading),
            radius: MARKER_RADIUS,
            color,
        }
    }

    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.position.x += rng.gen_range(-STEP_JITTER..STEP_JITTER);
        self.position.y += rng.gen_range(-STEP_JITTER..STEP_JITTER);
        self.heading = wrap_degrees(self.heading + rng.gen_range(-HEADING_JITTER..HEADING_JITTER));
    }
}

#[derive(Clone, Debug, Default)]
pub struct EntityLayer {
    entities: Vec<Entity>,
}

impl EntityLayer {
    /// Scatters `count` entities uniformly over `world`, all facing 0°.
    pub fn spawn<R: Rng + ?Sized>(count: usize, world: Size, rng: &mut R) -> Self {
        let entities = (0..count)
            .map(|_| {
                let position = Point::new(
                    rng.r#gen::<f64>() * world.width,
                    rng.r#gen::<f64>() * world.height,
                );
                let color = if rng.gen_bool(0.5) {
                    EntityColor::Blue
                } else {
                    EntityColor::Green
                };
                Entity::new(position, 0.0, color)
            })
            .collect();
        Self { entities }
    }

    pub fn from_entities(entities: Vec<Entity>) -> Self {
        Self { entities }
    }

    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for entity in &mut self.entities {
            entity.step(rng);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn spawn_places_entities_inside_world() {
        let mut rng = SmallRng::seed_from_u64(1);
        let layer = EntityLayer::spawn(5, Size::square(512.0), &mut rng);
        assert_eq!(layer.len(), 5);
        for e in layer.iter() {
            assert!((0.0..512.0).contains(&e.position.x));
            assert!((0.0..512.0).contains(&e.position.y));
            assert_eq!(e.heading, 0.0);
            assert_eq!(e.radius, MARKER_RADIUS);
        }
    }

    #[test]
    fn tick_moves_each_entity_by_bounded_amount() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut layer = EntityLayer::spawn(20, Size::square(512.0), &mut rng);
        let before: Vec<Entity> = layer.iter().cloned().collect();
        layer.tick(&mut rng);
        for (old, new) in before.iter().zip(layer.iter()) {
            assert!((new.position.x - old.position.x).abs() <= STEP_JITTER);
            assert!((new.position.y - old.position.y).abs() <= STEP_JITTER);
            assert!((0.0..360.0).contains(&new.heading));
        }
    }

    #[test]
    fn colors_are_chosen_once() {
        let mut rng = SmallRng::seed_from_u64(9);
        let mut layer = EntityLayer::spawn(16, Size::square(512.0), &mut rng);
        let colors: Vec<EntityColor> = layer.iter().map(|e| e.color).collect();
        for _ in 0..50 {
            layer.tick(&mut rng);
        }
        let after: Vec<EntityColor> = layer.iter().map(|e| e.color).collect();
        assert_eq!(colors, after);
    }

    #[test]
    fn heading_wraps_below_zero() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut e = Entity::new(Point::ORIGIN, 0.0, EntityColor::Green);
        for _ in 0..200 {
            e.step(&mut rng);
            assert!(e.heading >= 0.0 && e.heading < 360.0, "heading {}", e.heading);
        }
    }

    #[test]
    fn new_entity_normalizes_heading() {
        let e = Entity::new(Point::ORIGIN, -90.0, EntityColor::Blue);
        assert_eq!(e.heading, 270.0);
        assert_eq!(e.color.css(), "blue");
    }

    #[test]
    fn entities_may_leave_the_map() {
        let mut rng = SmallRng::seed_from_u64(5);
        let mut layer = EntityLayer::from_entities(vec![Entity::new(
            Point::new(0.5, 0.5),
            0.0,
            EntityColor::Blue,
        )]);
        let mut left = false;
        for _ in 0..500 {
            layer.tick(&mut rng);
            let p = layer.iter().next().map(|e| e.position).unwrap();
            if p.x < 0.0 || p.y < 0.0 {
                left = true;
                break;
            }
        }
        assert!(left);
    }
}
