use crate::core::instance_header::InstanceHeader;
use crate::error::HoeffdingError;

/// An online classifier over points described by an [`InstanceHeader`].
pub trait Classifier {
    fn header(&self) -> &InstanceHeader;

    fn number_of_classes(&self) -> usize;

    /// Predicted class and the confidence attached to it.
    fn predict_with_probability(&self, point: &[f64]) -> Result<(usize, f64), HoeffdingError>;

    fn predict(&self, point: &[f64]) -> Result<usize, HoeffdingError> {
        self.predict_with_probability(point).map(|(class, _)| class)
    }

    fn train_on_instance(&mut self, point: &[f64], label: usize) -> Result<(), HoeffdingError>;
}
