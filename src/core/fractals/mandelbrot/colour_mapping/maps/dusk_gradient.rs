use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::colour_mapping::map::MandelbrotColourMap;
use crate::core::fractals::mandelbrot::colour_mapping::maps::log_gradient::LogGradient;

const START: Colour = Colour::new(70, 90, 110);
const END: Colour = Colour::new(255, 160, 80);

/// Muted blue-grey fading into a calm orange.
#[derive(Debug)]
pub struct MandelbrotDuskGradient {
    gradient: LogGradient,
}

impl ColourMap<u32> for MandelbrotDuskGradient {
    fn map(&self, iterations: u32) -> Colour {
        self.gradient.colour(iterations)
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl MandelbrotColourMap for MandelbrotDuskGradient {
    fn kind(&self) -> MandelbrotColourMapKinds {
        MandelbrotColourMapKinds::DuskGradient
    }
}

impl MandelbrotDuskGradient {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self {
            gradient: LogGradient::new(START, END, max_iterations),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fractals::mandelbrot::algorithm::BOUNDED;

    #[test]
    fn test_map_returns_black_for_bounded() {
        let mapper = MandelbrotDuskGradient::new(1000);

        assert_eq!(mapper.map(BOUNDED), Colour::BLACK);
    }

    #[test]
    fn test_map_first_iteration_is_blue_grey() {
        let mapper = MandelbrotDuskGradient::new(1000);

        assert_eq!(mapper.map(1), Colour::new(70, 90, 110));
    }

    #[test]
    fn test_map_near_budget_is_orange() {
        let mapper = MandelbrotDuskGradient::new(1000);

        assert_eq!(mapper.map(999), Colour::new(255, 160, 80));
    }

    #[test]
    fn test_channels_move_monotonically_towards_end() {
        let mapper = MandelbrotDuskGradient::new(1000);
        let mut previous = mapper.map(1);

        for i in 2..1000 {
            let colour = mapper.map(i);

            // red and green rise, blue falls
            assert!(colour.r >= previous.r, "red reversed at {}", i);
            assert!(colour.g >= previous.g, "green reversed at {}", i);
            assert!(colour.b <= previous.b, "blue reversed at {}", i);
            previous = colour;
        }
    }
}
