//! Built-in license headers.

use tracing::debug;

use crudy_core::{
    application::ports::LicenseProvider,
    domain::{License, Project},
    error::{CrudyError, CrudyResult},
};

const APACHE_2_HEADER: &str = "\
Licensed under the Apache License, Version 2.0 (the \"License\");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an \"AS IS\" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.";

const MIT_HEADER: &str = "\
Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the \"Software\"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in
all copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED \"AS IS\", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
THE SOFTWARE.";

const GPL_3_HEADER: &str = "\
This program is free software: you can redistribute it and/or modify
it under the terms of the GNU General Public License as published by
the Free Software Foundation, either version 3 of the License, or
(at your option) any later version.

This program is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
GNU General Public License for more details.

You should have received a copy of the GNU General Public License
along with this program. If not, see <http://www.gnu.org/licenses/>.";

/// Canonical license names, `none` included.
pub const AVAILABLE: [&str; 4] = ["apache-2.0", "mit", "gpl-3.0", "none"];

/// Look up a license by name or alias, ignoring case.
pub fn lookup(name: &str) -> Option<License> {
    let license = match name.trim().to_ascii_lowercase().as_str() {
        "apache-2.0" | "apache" | "apache2" => License::new("apache-2.0", APACHE_2_HEADER),
        "mit" => License::new("mit", MIT_HEADER),
        "gpl-3.0" | "gpl" | "gpl3" => License::new("gpl-3.0", GPL_3_HEADER),
        "none" => License::none(),
        _ => return None,
    };
    Some(license)
}

/// [`LicenseProvider`] backed by the built-in headers.
#[derive(Debug, Clone)]
pub struct BuiltinLicenses {
    name: String,
}

impl BuiltinLicenses {
    /// Provider that hands out the license called `name` to every project.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Fail early on unknown names.
    pub fn validate(&self) -> CrudyResult<()> {
        self.resolve().map(|_| ())
    }

    fn resolve(&self) -> CrudyResult<License> {
        lookup(&self.name).ok_or_else(|| {
            CrudyError::configuration(format!(
                "unknown license '{}' (available: {})",
                self.name,
                AVAILABLE.join(", ")
            ))
        })
    }
}

impl LicenseProvider for BuiltinLicenses {
    fn license_for(&self, project: &Project) -> CrudyResult<License> {
        let license = self.resolve()?;
        debug!(project = %project.name(), license = %license.name(), "license selected");
        Ok(license)
    }
}
