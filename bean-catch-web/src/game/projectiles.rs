//! Live beans, oldest first

use super::projectile::{Projectile, Trajectory};

#[derive(Clone, Debug, Default)]
pub struct ProjectileSet {
    items: Vec<Projectile>,
}

impl ProjectileSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one fresh bean at `start`
    pub fn spawn(&mut self, start: (f64, f64), trajectory: Trajectory) {
        self.items.push(Projectile::new(start, trajectory));
    }

    /// Drop inactive beans, keeping the order of the rest.
    /// Returns how many were removed.
    pub fn compact(&mut self) -> usize {
        let before = self.items.len();
        self.items.retain(Projectile::is_active);
        before - self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Projectile> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Projectile> {
        self.items.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_is_stable() {
        let mut set = ProjectileSet::new();
        for x in 0..5 {
            set.spawn((x as f64, 0.0), Trajectory::default());
        }
        for (i, bean) in set.iter_mut().enumerate() {
            if i % 2 == 1 {
                bean.deactivate();
            }
        }

        assert_eq!(set.compact(), 2);
        let xs: Vec<f64> = set.iter().map(|b| b.start().0).collect();
        assert_eq!(xs, vec![0.0, 2.0, 4.0]);
    }

    #[test]
    fn test_compact_nothing_to_drop() {
        let mut set = ProjectileSet::new();
        set.spawn((0.0, 0.0), Trajectory::default());
        assert_eq!(set.compact(), 0);
        assert_eq!(set.len(), 1);
    }
}
