use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    kind: String,
    health: u32,
    speed: f64,
    armored: bool,
    weapon: String,
}

impl Enemy {
    pub fn new(
        kind: impl Into<String>,
        health: u32,
        speed: f64,
        armored: bool,
        weapon: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            health,
            speed,
            armored,
            weapon: weapon.into(),
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn armored(&self) -> bool {
        self.armored
    }

    pub fn weapon(&self) -> &str {
        &self.weapon
    }

    pub fn set_health(&mut self, health: u32) {
        self.health = health;
    }

    pub fn set_weapon(&mut self, weapon: impl Into<String>) {
        self.weapon = weapon.into();
    }

    pub fn stats(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Enemy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [Health: {}, Speed: {:.1}, Armored: {}, Weapon: {}]",
            self.kind, self.health, self.speed, self.armored, self.weapon
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_line() {
        let enemy = Enemy::new("BasicEnemy", 50, 5.0, false, "Machine Gun");
        assert_eq!(
            enemy.stats(),
            "BasicEnemy [Health: 50, Speed: 5.0, Armored: false, Weapon: Machine Gun]"
        );
    }

    #[test]
    fn test_clone_is_deep() {
        let template = Enemy::new("FlyingEnemy", 100, 10.0, false, "Cannon");
        let mut copy = template.clone();
        copy.set_health(200);
        copy.set_weapon("Laser");

        assert_eq!(template.health(), 100);
        assert_eq!(template.weapon(), "Cannon");
        assert_eq!(copy.health(), 200);
    }
}
