pub(crate) mod error;
pub(crate) mod poll;

use crate::app::error::Error;
use crate::app::poll::wait_for_completion;
use crate::configuration::command_line::{RunOpt, StatusOpt};
use crate::connection::api::{ApiClient, SuiteRunRequest};
use crate::reporter;
use reqwest::blocking::Client;

pub struct App {
    client: ApiClient<Client>,
}

impl App {
    pub fn new(api_key: Option<String>, api_url: String) -> Result<Self, Error> {
        let api_key = api_key.ok_or(Error::MissingApiKey)?;
        Ok(App {
            client: ApiClient::new(api_key, api_url)?,
        })
    }

    /// Trigger a suite run, wait for it to finish, and report the outcome.
    /// Returns the process exit code: non-zero when any test failed.
    pub fn run(&self, options: &RunOpt) -> Result<i32, Error> {
        let request = SuiteRunRequest {
            base_url: options.base_url.clone(),
            ci_run_id: options.ci_run_id.clone(),
            branch: options.branch.clone(),
            commit: options.commit.clone(),
        };
        let handle = self.client.trigger_suite_run(&options.suite_id, &request)?;
        let status = wait_for_completion(
            &self.client,
            &handle.suite_run_id,
            options.timeout,
            options.poll_interval,
        )?;
        println!(
            "{}",
            reporter::render(&status, options.api.output, Some(&handle.suite_run_id))
        );
        Ok(reporter::exit_code_for_run(&status))
    }

    /// Fetch the current status of an existing suite run and report it.
    /// Unlike `run`, a `failed` state is fatal here even with zero failed
    /// tests, so aborted-style failures without a per-test breakdown still
    /// gate the build.
    pub fn status(&self, options: &StatusOpt) -> Result<i32, Error> {
        let status = self.client.suite_run_status(&options.suite_run_id)?;
        println!("{}", reporter::render(&status, options.api.output, None));
        Ok(reporter::exit_code_for_status(&status))
    }
}
