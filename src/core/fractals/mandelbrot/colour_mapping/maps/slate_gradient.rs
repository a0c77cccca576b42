use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::colour_mapping::map::MandelbrotColourMap;
use crate::core::fractals::mandelbrot::colour_mapping::maps::log_gradient::LogGradient;

const START: Colour = Colour::new(40, 50, 70);
const END: Colour = Colour::new(180, 190, 200);

#[derive(Debug)]
pub struct MandelbrotSlateGradient {
    gradient: LogGradient,
}

impl ColourMap<u32> for MandelbrotSlateGradient {
    fn map(&self, iterations: u32) -> Colour {
        self.gradient.colour(iterations)
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl MandelbrotColourMap for MandelbrotSlateGradient {
    fn kind(&self) -> MandelbrotColourMapKinds {
        MandelbrotColourMapKinds::SlateGradient
    }
}

impl MandelbrotSlateGradient {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self {
            gradient: LogGradient::new(START, END, max_iterations),
        }
    }
}
